//! what to do with device-originated messages. decided once, from the
//! declared outports, before anything subscribes

use std::collections::HashSet;

use itertools::Itertools;

#[derive(Debug)]
pub enum ConsolePlan {
    /// nothing will ever arrive. take the log ui down instead of subscribing
    Remove,
    Subscribe(OutportFilter),
}

impl ConsolePlan {
    pub fn for_outports<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: HashSet<String> = tags.into_iter().map(Into::into).collect();

        if tags.is_empty() {
            Self::Remove
        } else {
            Self::Subscribe(OutportFilter { tags })
        }
    }
}

/// drops events for tags the patch never declared. the runtime's stream
/// carries everything, not just outport traffic
#[derive(Debug)]
pub struct OutportFilter {
    tags: HashSet<String>,
}

impl OutportFilter {
    pub fn accepts(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn format_line(&self, tag: &str, payload: &[f64]) -> String {
        format!("{tag}: {}", payload.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::ConsolePlan;

    #[test_log::test]
    fn test_no_outports_means_remove() {
        let plan = ConsolePlan::for_outports(Vec::<String>::new());

        assert!(matches!(plan, ConsolePlan::Remove));
    }

    #[test_log::test]
    fn test_filter_accepts_declared_tags_only() {
        let plan = ConsolePlan::for_outports(["beat", "bar"]);

        let ConsolePlan::Subscribe(filter) = plan else {
            panic!("expected a subscription");
        };

        assert!(filter.accepts("beat"));
        assert!(filter.accepts("bar"));
        assert!(!filter.accepts("tempo"));
        assert!(!filter.accepts(""));
    }

    #[test_log::test]
    fn test_format_line() {
        let ConsolePlan::Subscribe(filter) = ConsolePlan::for_outports(["beat"]) else {
            panic!("expected a subscription");
        };

        assert_eq!(filter.format_line("beat", &[1.0]), "beat: 1");
        assert_eq!(filter.format_line("beat", &[1.0, 2.5, -3.0]), "beat: 1 2.5 -3");
        assert_eq!(filter.format_line("beat", &[]), "beat: ");
    }
}
