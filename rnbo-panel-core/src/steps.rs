//! step slider payloads. every change resends the whole row so the patch
//! never sees a partial sequence

use itertools::Itertools;

use crate::errors::{PanelError, PanelResult};

/// join the sliders' current values, in index order, into one message body
pub fn join_step_values<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values.into_iter().map(|v| v.as_ref().trim().to_string()).join(" ")
}

/// split a whitespace/comma separated list back into numbers
pub fn parse_number_list(text: &str) -> PanelResult<Vec<f64>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| PanelError::BadNumber(token.to_string()))
        })
        .collect()
}
