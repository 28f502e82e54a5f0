/*! Runtime configuration for an [`Mwc`](crate::Mwc) instance. */

/// Tunables for window discovery.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  /// Bundle ids skipped by `apps()` and `window_apps()`.
  pub ignored_bundle_ids: Vec<String>,
  /// Titlebar estimates at or above this are discarded (points).
  pub titlebar_max_height: f64,
  /// Node budget for accessibility tree searches.
  pub search_limit: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      ignored_bundle_ids: vec!["com.apple.WebKit.WebContent".to_owned()],
      titlebar_max_height: 60.0,
      search_limit: 2000,
    }
  }
}

impl Config {
  pub(crate) fn is_ignored(&self, bundle_id: Option<&str>) -> bool {
    bundle_id.is_some_and(|id| self.ignored_bundle_ids.iter().any(|i| i == id))
  }
}
