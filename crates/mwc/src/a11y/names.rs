/*!
macOS accessibility string constants (kAX*).
*/

/// Attribute names (kAX*Attribute).
pub(crate) mod attr {
  pub(crate) const ROLE: &str = "AXRole";
  pub(crate) const SUBROLE: &str = "AXSubrole";
  pub(crate) const TITLE: &str = "AXTitle";
  pub(crate) const IDENTIFIER: &str = "AXIdentifier";
  pub(crate) const CHILDREN: &str = "AXChildren";
  pub(crate) const POSITION: &str = "AXPosition";
  pub(crate) const SIZE: &str = "AXSize";
  pub(crate) const MINIMIZED: &str = "AXMinimized";
  pub(crate) const WINDOWS: &str = "AXWindows";
  pub(crate) const MAIN_WINDOW: &str = "AXMainWindow";
  pub(crate) const FOCUSED_WINDOW: &str = "AXFocusedWindow";
}

/// Action names (kAX*Action).
pub(crate) mod action {
  pub(crate) const RAISE: &str = "AXRaise";
}

/// Subrole values (kAX*Subrole).
pub(crate) mod subrole {
  pub(crate) const CLOSE_BUTTON: &str = "AXCloseButton";
}

/// Role values (kAX*Role).
pub(crate) mod role {
  pub(crate) const TOOLBAR: &str = "AXToolbar";
}
