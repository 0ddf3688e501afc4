//! Probe command forms and cache format

use std::time::Duration;

use crate::network::types::{ProbeForm, ProbeStrategy};

pub const LOOPBACK: &str = "127.0.0.1";
pub const PING: &str = "ping";

/// Ping argv for `form`, with the timeout flag (if any) taken from `budget`
pub fn strategy_for(form: ProbeForm, budget: Duration) -> ProbeStrategy {
    let mut argv: Vec<String> = [PING, "-c", "1"].into_iter().map(String::from).collect();
    let timeout = match form {
        ProbeForm::Millis => Some(budget.as_millis().max(1).to_string()),
        ProbeForm::Seconds => Some(budget.as_secs_f64().ceil().max(1.0).to_string()),
        ProbeForm::Plain => None,
    };
    if let Some(timeout) = timeout {
        argv.push("-W".to_string());
        argv.push(timeout);
    }
    ProbeStrategy { form, argv }
}

/// Candidate ping forms in preference order: millisecond timeout flag,
/// second timeout flag, no timeout flag
pub fn candidate_strategies(budget: Duration) -> Vec<ProbeStrategy> {
    ProbeForm::ALL
        .into_iter()
        .map(|form| strategy_for(form, budget))
        .collect()
}

/// Only the form is cached; the timeout value is rebuilt from the current budget
pub fn encode_form(form: ProbeForm) -> String {
    form.name().to_string()
}

/// Parse a cached form line; anything unknown is a miss
pub fn decode_form(line: &str) -> Option<ProbeForm> {
    ProbeForm::from_name(line.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_forms() {
        let forms = candidate_strategies(Duration::from_millis(1500));
        assert_eq!(forms.len(), 3);
        assert_eq!(forms[0].argv, vec!["ping", "-c", "1", "-W", "1500"]);
        assert_eq!(forms[1].argv, vec!["ping", "-c", "1", "-W", "2"]);
        assert_eq!(forms[2].argv, vec!["ping", "-c", "1"]);
        assert_eq!(forms[1].form, ProbeForm::Seconds);
    }

    #[test]
    fn test_form_cache_line() {
        assert_eq!(encode_form(ProbeForm::Seconds), "seconds");
        assert_eq!(decode_form("millis\n"), Some(ProbeForm::Millis));
        assert_eq!(decode_form("plain"), Some(ProbeForm::Plain));
        assert_eq!(decode_form("   \n"), None);
        // Full argv lines carry a stale timeout value and are not accepted
        assert_eq!(decode_form("ping -c 1 -W 1000"), None);
    }
}
