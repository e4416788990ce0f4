//! Theme stylesheets for the markup format.
//!
//! Each style is a self-contained CSS payload written against the
//! default `wf-` class prefix; a custom prefix is substituted on the
//! way out so the stylesheet always matches the emitted markup.
use super::Style;

const SKETCH: &str = "\
.wf-document { font-family: \"Comic Sans MS\", \"Segoe Print\", cursive; \
max-width: 48rem; margin: 0 auto; padding: 1.5rem; color: #333; }
.wf-heading { margin: 0.75rem 0 0.25rem; }
.wf-text { margin: 0.25rem 0; }
.wf-button { border: 2px solid #333; border-radius: 255px 15px 225px 15px / \
15px 225px 15px 255px; background: #fff; padding: 0.4rem 1rem; \
font: inherit; cursor: pointer; }
.wf-button-primary { background: #333; color: #fff; }
.wf-input, .wf-select select { border: 2px solid #333; border-radius: \
15px 255px 15px 225px / 225px 15px 255px 15px; background: #fff; \
padding: 0.4rem 0.6rem; font: inherit; width: 100%; }
.wf-select { display: block; margin: 0.25rem 0; }
.wf-checkbox, .wf-radio { display: inline-flex; align-items: center; \
gap: 0.4rem; }
.wf-icon { display: inline-block; width: 1.25em; height: 1.25em; \
border: 2px dashed #333; border-radius: 50%; vertical-align: middle; }
.wf-image { max-width: 100%; border: 2px dashed #333; }
.wf-list { list-style: none; padding: 0; margin: 0.25rem 0; }
.wf-list li { margin: 0.2rem 0; }
.wf-container { border: 2px solid #333; border-radius: \
255px 15px 225px 15px / 15px 225px 15px 255px; padding: 1rem; \
margin: 0.75rem 0; }
.wf-container[data-columns] { display: grid; gap: 1rem; }
.wf-container[data-columns=\"2\"] { grid-template-columns: 1fr 1fr; }
.wf-container[data-columns=\"3\"] { grid-template-columns: 1fr 1fr 1fr; }
.wf-container[data-columns=\"4\"] { grid-template-columns: repeat(4, 1fr); }
.wf-nav { display: flex; align-items: center; gap: 1rem; padding: 0.5rem 0; \
border-bottom: 2px solid #333; }
";

const CLEAN: &str = "\
.wf-document { font-family: -apple-system, \"Segoe UI\", sans-serif; \
max-width: 48rem; margin: 0 auto; padding: 1.5rem; color: #1f2937; }
.wf-heading { margin: 0.75rem 0 0.25rem; font-weight: 600; }
.wf-text { margin: 0.25rem 0; color: #4b5563; }
.wf-button { border: 1px solid #d1d5db; border-radius: 6px; \
background: #fff; padding: 0.4rem 1rem; font: inherit; cursor: pointer; }
.wf-button-primary { background: #111827; border-color: #111827; \
color: #fff; }
.wf-input, .wf-select select { border: 1px solid #d1d5db; \
border-radius: 6px; padding: 0.4rem 0.6rem; font: inherit; width: 100%; }
.wf-select { display: block; margin: 0.25rem 0; }
.wf-checkbox, .wf-radio { display: inline-flex; align-items: center; \
gap: 0.4rem; }
.wf-icon { display: inline-block; width: 1.25em; height: 1.25em; \
background: #e5e7eb; border-radius: 4px; vertical-align: middle; }
.wf-image { max-width: 100%; border-radius: 6px; }
.wf-list { list-style: none; padding: 0; margin: 0.25rem 0; }
.wf-list li { margin: 0.2rem 0; }
.wf-container { border: 1px solid #e5e7eb; border-radius: 8px; \
padding: 1rem; margin: 0.75rem 0; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
.wf-container[data-columns] { display: grid; gap: 1rem; }
.wf-container[data-columns=\"2\"] { grid-template-columns: 1fr 1fr; }
.wf-container[data-columns=\"3\"] { grid-template-columns: 1fr 1fr 1fr; }
.wf-container[data-columns=\"4\"] { grid-template-columns: repeat(4, 1fr); }
.wf-nav { display: flex; align-items: center; gap: 1rem; padding: 0.5rem 0; \
border-bottom: 1px solid #e5e7eb; }
";

const WIREFRAME: &str = "\
.wf-document { font-family: \"Helvetica Neue\", Arial, sans-serif; \
max-width: 48rem; margin: 0 auto; padding: 1.5rem; color: #374151; \
background: #f9fafb; }
.wf-heading { margin: 0.75rem 0 0.25rem; }
.wf-text { margin: 0.25rem 0; color: #6b7280; }
.wf-button { border: 1px solid #9ca3af; background: #e5e7eb; \
padding: 0.4rem 1rem; font: inherit; cursor: pointer; }
.wf-button-primary { background: #9ca3af; color: #fff; }
.wf-input, .wf-select select { border: 1px solid #9ca3af; \
background: #fff; padding: 0.4rem 0.6rem; font: inherit; width: 100%; }
.wf-select { display: block; margin: 0.25rem 0; }
.wf-checkbox, .wf-radio { display: inline-flex; align-items: center; \
gap: 0.4rem; }
.wf-icon { display: inline-block; width: 1.25em; height: 1.25em; \
border: 1px solid #9ca3af; background: \
linear-gradient(45deg, transparent 45%, #9ca3af 45%, #9ca3af 55%, \
transparent 55%); vertical-align: middle; }
.wf-image { max-width: 100%; border: 1px solid #9ca3af; background: #e5e7eb; }
.wf-list { list-style: none; padding: 0; margin: 0.25rem 0; }
.wf-list li { margin: 0.2rem 0; }
.wf-container { border: 1px solid #9ca3af; padding: 1rem; \
margin: 0.75rem 0; background: #fff; }
.wf-container[data-columns] { display: grid; gap: 1rem; }
.wf-container[data-columns=\"2\"] { grid-template-columns: 1fr 1fr; }
.wf-container[data-columns=\"3\"] { grid-template-columns: 1fr 1fr 1fr; }
.wf-container[data-columns=\"4\"] { grid-template-columns: repeat(4, 1fr); }
.wf-nav { display: flex; align-items: center; gap: 1rem; padding: 0.5rem 0; \
border-bottom: 1px solid #9ca3af; }
";

/// Stylesheet payload for a style, rewritten for the class prefix.
///
/// `Style::None` has no payload and the markup renderer skips the
/// `<style>` block entirely.
pub(super) fn stylesheet(style: Style, prefix: &str) -> Option<String> {
  let css = match style {
    Style::Sketch => SKETCH,
    Style::Clean => CLEAN,
    Style::Wireframe => WIREFRAME,
    Style::None => return None,
  };
  if prefix == "wf-" {
    Some(css.to_string())
  } else {
    Some(css.replace(".wf-", &format!(".{prefix}")))
  }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]
mod tests {
  use super::*;

  #[test]
  fn none_style_has_no_payload() {
    assert!(stylesheet(Style::None, "wf-").is_none());
  }

  #[test]
  fn custom_prefix_rewrites_every_selector() {
    let css = stylesheet(Style::Clean, "app-").unwrap();
    assert!(css.contains(".app-button"));
    assert!(!css.contains(".wf-"));
  }
}
