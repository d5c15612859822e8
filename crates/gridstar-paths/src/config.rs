/// How the open set is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FrontierKind {
    /// A list sorted before each removal. See [`LinearFrontier`](crate::LinearFrontier).
    #[default]
    Linear,
    /// A binary heap. See [`HeapFrontier`](crate::HeapFrontier).
    Heap,
}

/// Search configuration.
///
/// Every strategy returns the same path for the same inputs; the choice only
/// affects running time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub frontier: FrontierKind,
}

impl SearchConfig {
    /// Set the frontier strategy.
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_from_json() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"frontier":"heap"}"#).unwrap();
        assert_eq!(cfg.frontier, FrontierKind::Heap);
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
    }

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default().with_frontier(FrontierKind::Heap);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
