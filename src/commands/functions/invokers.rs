use std::collections::BTreeMap;

pub const BUILTIN_INVOKERS: [(&str, &str); 4] = [
    (
        "command",
        "https://github.com/projectriff/command-function-invoker/raw/v0.0.7/command-invoker.yaml",
    ),
    (
        "java",
        "https://github.com/projectriff/java-function-invoker/raw/v0.0.7/java-invoker.yaml",
    ),
    (
        "node",
        "https://github.com/projectriff/node-function-invoker/raw/v0.0.8/node-invoker.yaml",
    ),
    (
        "python3",
        "https://github.com/projectriff/python3-function-invoker/raw/v0.0.6/python3-invoker.yaml",
    ),
];

/// Maps invoker names to the URL of their invoker manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invokers(BTreeMap<String, String>);

impl Invokers {
    /// The builtin invokers, overridden and extended by `extra`.
    pub fn new(extra: &BTreeMap<String, String>) -> Self {
        let mut invokers = BUILTIN_INVOKERS
            .iter()
            .map(|(name, url)| ((*name).to_string(), (*url).to_string()))
            .collect::<BTreeMap<_, _>>();

        invokers.extend(extra.clone());

        Self(invokers)
    }

    pub fn names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// An explicit URL always wins over the table.
    pub fn resolve(&self, invoker: &str, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.0.get(invoker).cloned())
    }
}

impl Default for Invokers {
    fn default() -> Self {
        Self::new(&BTreeMap::new())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_builtin_node() {
        assert_eq!(
            Invokers::default().resolve("node", None).as_deref(),
            Some("https://github.com/projectriff/node-function-invoker/raw/v0.0.8/node-invoker.yaml")
        );
        assert_eq!(Invokers::default().resolve("cobol", None), None);
    }

    #[test]
    fn test_explicit_url_wins() {
        assert_eq!(
            Invokers::default()
                .resolve("node", Some("https://example.com/mine.yaml"))
                .as_deref(),
            Some("https://example.com/mine.yaml")
        );
        assert_eq!(
            Invokers::default()
                .resolve("cobol", Some("https://example.com/cobol.yaml"))
                .as_deref(),
            Some("https://example.com/cobol.yaml")
        );
    }

    #[test]
    fn test_extra_invokers() {
        let extra = BTreeMap::from([
            ("go".to_string(), "https://example.com/go.yaml".to_string()),
            ("node".to_string(), "https://example.com/node.yaml".to_string()),
        ]);
        let invokers = Invokers::new(&extra);

        assert_eq!(invokers.names(), vec!["command", "go", "java", "node", "python3"]);
        assert_eq!(
            invokers.resolve("node", None).as_deref(),
            Some("https://example.com/node.yaml")
        );
    }
}
