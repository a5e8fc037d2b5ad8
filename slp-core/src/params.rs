//! Query parameters passed from the home form to the dashboard view.

use serde::{Deserialize, Serialize};

pub const DEFAULT_IDEA: &str = "My Startup";
pub const DEFAULT_DESCRIPTION: &str = "A new business venture";

/// Idea and name used by the "View demo" button.
pub const DEMO_IDEA: &str = "A coffee shop that sells honey";
pub const DEMO_NAME: &str = "Hawney";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardParams {
    pub idea: String,
    pub name: String,
    pub description: Option<String>,
    pub demo: bool,
}

impl DashboardParams {
    pub fn new(idea: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            name: name.into(),
            description: None,
            demo: false,
        }
    }

    pub fn demo() -> Self {
        Self {
            demo: true,
            ..Self::new(DEMO_IDEA, DEMO_NAME)
        }
    }

    /// Build from already-decoded `(key, value)` pairs. Unknown keys are
    /// ignored; `demo` is on only for `true` or `1`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "idea" => params.idea = value.into(),
                "name" => params.name = value.into(),
                "description" => params.description = Some(value.into()),
                "demo" => {
                    let v: String = value.into();
                    params.demo = matches!(v.trim(), "true" | "1");
                }
                _ => {}
            }
        }
        params
    }

    /// `(key, value)` pairs to encode into the dashboard URL.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("idea", self.idea.clone()), ("name", self.name.clone())];
        if let Some(description) = &self.description {
            pairs.push(("description", description.clone()));
        }
        if self.demo {
            pairs.push(("demo", "true".to_string()));
        }
        pairs
    }

    /// Whether the dashboard view should be shown instead of the home form.
    pub fn has_idea(&self) -> bool {
        !self.idea.trim().is_empty()
    }

    /// Heading shown in the dashboard header.
    pub fn title(&self) -> &str {
        if self.has_idea() {
            &self.idea
        } else {
            DEFAULT_IDEA
        }
    }

    pub fn description(&self) -> &str {
        match &self.description {
            Some(d) if !d.trim().is_empty() => d,
            _ => DEFAULT_DESCRIPTION,
        }
    }

    /// Brand name, falling back to one derived from the idea.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            company_name_from_idea(self.title())
        } else {
            self.name.clone()
        }
    }
}

/// Derive a placeholder company name from the first words of an idea:
/// `"coffee shop"` becomes `"coffeeShop"`, a single word gets a `Hub` suffix.
pub fn company_name_from_idea(idea: &str) -> String {
    let mut words = idea.split_whitespace();
    match (words.next(), words.next()) {
        (Some(first), Some(second)) => {
            let mut chars = second.chars();
            let capitalized: String = match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect(),
                None => String::new(),
            };
            format!("{}{}", first, capitalized)
        }
        (Some(first), None) => format!("{}Hub", first),
        _ => "StartupHub".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let params = DashboardParams::from_pairs([
            ("idea", "Honey coffee"),
            ("name", "Hawney"),
            ("demo", "true"),
            ("utm", "x"),
        ]);
        assert_eq!(params.idea, "Honey coffee");
        assert_eq!(params.name, "Hawney");
        assert!(params.demo);
    }

    #[test]
    fn test_demo_flag_needs_truthy_value() {
        assert!(!DashboardParams::from_pairs([("demo", "false")]).demo);
        assert!(!DashboardParams::from_pairs([("demo", "")]).demo);
        assert!(DashboardParams::from_pairs([("demo", "1")]).demo);
    }

    #[test]
    fn test_defaults() {
        let params = DashboardParams::default();
        assert!(!params.has_idea());
        assert_eq!(params.title(), "My Startup");
        assert_eq!(params.description(), "A new business venture");
        assert_eq!(params.display_name(), "MyStartup");
    }

    #[test]
    fn test_pairs_round_trip() {
        let params = DashboardParams::demo();
        let pairs = params.to_pairs();
        assert!(pairs.contains(&("demo", "true".to_string())));
        assert_eq!(DashboardParams::from_pairs(pairs), params);
    }

    #[test]
    fn test_company_name_from_idea() {
        assert_eq!(company_name_from_idea("coffee shop with honey"), "coffeeShop");
        assert_eq!(company_name_from_idea("Plants"), "PlantsHub");
        assert_eq!(company_name_from_idea("   "), "StartupHub");
    }
}
