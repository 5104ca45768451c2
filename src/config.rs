use std::env::var;
use std::path::PathBuf;
use std::time::Duration;

use dotenvy::dotenv;

use crate::domain::models::{LATE_LUNCH_TEMPLATE, LunchTemplates, REGULAR_LUNCH_TEMPLATE};

const DEFAULT_OFFICE: &str = "New York";

pub struct Config {
    pub roster_path: PathBuf,
    pub office: String,
    pub templates: LunchTemplates,
    pub send_timeout: Option<Duration>,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Config, &'static str> {
        let send_timeout = match lookup("SEND_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| "An error occured while parsing SEND_TIMEOUT_SECS env param")?;
                if secs == 0 {
                    return Err("SEND_TIMEOUT_SECS env param must be positive");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            roster_path: lookup("ROSTER_PATH")
                .map(PathBuf::from)
                .ok_or("An error occured while getting ROSTER_PATH env param")?,
            office: lookup("OFFICE").unwrap_or_else(|| DEFAULT_OFFICE.to_string()),
            templates: LunchTemplates::new(
                lookup("REGULAR_LUNCH_TEMPLATE")
                    .unwrap_or_else(|| REGULAR_LUNCH_TEMPLATE.to_string()),
                lookup("LATE_LUNCH_TEMPLATE")
                    .unwrap_or_else(|| LATE_LUNCH_TEMPLATE.to_string()),
            ),
            send_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(pairs: &[(&str, &str)]) -> Result<Config, &'static str> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_roster_is_set() {
        let config = parse(&[("ROSTER_PATH", "/etc/lunch/roster.json")]).unwrap();

        assert_eq!(config.roster_path, PathBuf::from("/etc/lunch/roster.json"));
        assert_eq!(config.office, "New York");
        assert_eq!(config.templates, LunchTemplates::default());
        assert_eq!(config.send_timeout, None);
    }

    #[test]
    fn roster_path_is_required() {
        assert!(parse(&[("OFFICE", "Berlin")]).is_err());
    }

    #[test]
    fn overrides_are_read() {
        let config = parse(&[
            ("ROSTER_PATH", "roster.json"),
            ("OFFICE", "Berlin"),
            ("REGULAR_LUNCH_TEMPLATE", "Mahlzeit!"),
            ("LATE_LUNCH_TEMPLATE", "Spät, aber Mahlzeit!"),
            ("SEND_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.office, "Berlin");
        assert_eq!(config.templates.regular, "Mahlzeit!");
        assert_eq!(config.templates.late, "Spät, aber Mahlzeit!");
        assert_eq!(config.send_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        assert!(parse(&[("ROSTER_PATH", "r.json"), ("SEND_TIMEOUT_SECS", "soon")]).is_err());
        assert!(parse(&[("ROSTER_PATH", "r.json"), ("SEND_TIMEOUT_SECS", "0")]).is_err());
    }
}
