//! The viewer controller.
//!
//! Data flows one way: raw text, then a decoded pair, then two rendered
//! panes. The only mutable state is the raw text and decoded document of
//! each side, their expand flags, the error banner and the theme.

use jtc_diff::{compare, container_of, node_at, resolve_pointer, Comparison, DiffError, DiffSummary};
use jtc_render::{render_pane, ExpandState, Painter, Pane, Screen};
use jtc_types::{Path, Side, Theme};
use serde_json::Value;
use tracing::{debug, warn};

use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::config::ViewerConfig;
use crate::error::{SessionError, SessionResult, INVALID_JSON_MESSAGE};

#[derive(Debug)]
struct PaneState {
    text: String,
    document: Option<Value>,
    expand: ExpandState,
}

impl PaneState {
    fn new(expand_depth: usize) -> Self {
        Self {
            text: String::new(),
            document: None,
            expand: ExpandState::new(expand_depth),
        }
    }
}

/// One comparison session: two inputs, their decoded documents and the view.
pub struct Viewer {
    config: ViewerConfig,
    theme: Theme,
    left: PaneState,
    right: PaneState,
    error: Option<&'static str>,
    clipboard: Box<dyn Clipboard>,
}

impl Viewer {
    pub fn new(config: ViewerConfig, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            theme: config.theme,
            left: PaneState::new(config.expand_depth),
            right: PaneState::new(config.expand_depth),
            error: None,
            clipboard,
            config,
        }
    }

    /// A viewer whose copies land in an in-memory clipboard.
    pub fn headless(config: ViewerConfig) -> Self {
        Self::new(config, Box::new(MemoryClipboard::new()))
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    fn pane(&self, side: Side) -> &PaneState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn pane_mut(&mut self, side: Side) -> &mut PaneState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    // ---- Inputs ----

    /// Replace the raw text of one side. Editing never clears the banner.
    pub fn set_text(&mut self, side: Side, text: impl Into<String>) {
        self.pane_mut(side).text = text.into();
    }

    pub fn text(&self, side: Side) -> &str {
        &self.pane(side).text
    }

    /// The decoded document of one side, if the last successful compare
    /// produced one and it has not been cleared since.
    pub fn document(&self, side: Side) -> Option<&Value> {
        self.pane(side).document.as_ref()
    }

    /// The banner message, set by a failed compare and cleared by the next
    /// successful one.
    pub fn error(&self) -> Option<&str> {
        self.error
    }

    // ---- Actions ----

    /// Decode both inputs and, if both are valid, replace both documents.
    ///
    /// Either input failing fails the whole action: the banner is set, the
    /// documents stay as they were, and the error names the first failing
    /// side.
    pub fn compare(&mut self) -> SessionResult<()> {
        let decoded = decode(Side::Left, &self.left.text)
            .and_then(|left| decode(Side::Right, &self.right.text).map(|right| (left, right)));

        match decoded {
            Ok((left, right)) => {
                self.left.document = Some(left);
                self.right.document = Some(right);
                self.left.expand.reset();
                self.right.expand.reset();
                self.error = None;
                debug!("compared documents");
                Ok(())
            }
            Err(err) => {
                if let SessionError::InvalidJson { side, source } = &err {
                    warn!(%side, error = %source, "decode failed");
                }
                self.error = Some(INVALID_JSON_MESSAGE);
                Err(err)
            }
        }
    }

    /// Empty one side's text and drop its document. The other side is
    /// untouched.
    pub fn clear(&mut self, side: Side) {
        let pane = self.pane_mut(side);
        pane.text.clear();
        pane.document = None;
        pane.expand.reset();
        debug!(%side, "cleared");
    }

    /// Copy one side's raw text verbatim. Failures are logged, not returned.
    pub fn copy(&mut self, side: Side) {
        let text = self.pane(side).text.clone();
        match self.clipboard.write_text(&text) {
            Ok(()) => debug!(%side, bytes = text.len(), "copied"),
            Err(e) => warn!(%side, error = %e, "copy failed"),
        }
    }

    /// Flip the expand state of the composite at `path` on one side and
    /// return the new state.
    pub fn toggle(&mut self, side: Side, path: &Path) -> SessionResult<bool> {
        let document = self.document(side).ok_or(SessionError::NoDocument(side))?;
        let node = node_at(document, path).ok_or_else(|| DiffError::PathNotFound {
            pointer: path.to_pointer(),
        })?;
        if container_of(node).is_none() {
            return Err(DiffError::NotComposite {
                pointer: path.to_pointer(),
            }
            .into());
        }
        let expanded = self.pane_mut(side).expand.toggle(path);
        debug!(%side, %path, expanded, "toggled");
        Ok(expanded)
    }

    /// [`toggle`](Self::toggle) addressed by JSON Pointer.
    pub fn toggle_pointer(&mut self, side: Side, pointer: &str) -> SessionResult<bool> {
        let document = self.document(side).ok_or(SessionError::NoDocument(side))?;
        let path = resolve_pointer(document, pointer)?;
        self.toggle(side, &path)
    }

    pub fn is_expanded(&self, side: Side, path: &Path) -> bool {
        self.pane(side).expand.is_expanded(path)
    }

    /// Expand every composite on both sides.
    pub fn expand_all(&mut self) {
        self.left.expand.expand_all();
        self.right.expand.expand_all();
    }

    /// Collapse every composite on both sides.
    pub fn collapse_all(&mut self) {
        self.left.expand.collapse_all();
        self.right.expand.collapse_all();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Switch between light and dark and return the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    // ---- Views ----

    fn documents(&self) -> Option<(&Value, &Value)> {
        if self.error.is_some() {
            return None;
        }
        Some((self.left.document.as_ref()?, self.right.document.as_ref()?))
    }

    /// Whether a comparison result is on screen: both documents present and
    /// no banner.
    pub fn has_result(&self) -> bool {
        self.documents().is_some()
    }

    /// Both sides fully annotated, independent of expand state.
    pub fn comparison(&self) -> Option<Comparison> {
        let (left, right) = self.documents()?;
        Some(compare(left, right))
    }

    pub fn summary(&self) -> Option<DiffSummary> {
        self.comparison().map(|c| c.summary)
    }

    /// The rendered trees, honoring each side's expand state.
    pub fn panes(&self) -> Option<(Pane, Pane)> {
        let (left, right) = self.documents()?;
        Some((
            render_pane(left, Some(right), Side::Left, &self.left.expand),
            render_pane(right, Some(left), Side::Right, &self.right.expand),
        ))
    }

    pub fn painter(&self, use_color: bool) -> Painter {
        Painter::new(self.theme, use_color).with_indent(self.config.indent)
    }

    /// The whole view: inputs, banner, result and legend.
    pub fn screen(&self) -> Screen<'_> {
        Screen::new()
            .with_title()
            .with_inputs(&self.left.text, &self.right.text)
            .with_error(self.error)
            .with_panes(self.panes())
            .with_legend()
    }

    /// Only the parts that depend on the comparison: banner and result.
    pub fn result_screen(&self) -> Screen<'_> {
        Screen::new()
            .with_error(self.error)
            .with_panes(self.panes())
    }

    pub fn render(&self, use_color: bool) -> String {
        self.screen()
            .render(&self.painter(use_color), self.config.pane_width)
    }
}

fn decode(side: Side, text: &str) -> SessionResult<Value> {
    serde_json::from_str(text).map_err(|source| SessionError::InvalidJson { side, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jtc_render::Tone;
    use jtc_types::{Annotation, Key};
    use proptest::prelude::*;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn viewer() -> Viewer {
        Viewer::headless(ViewerConfig::default())
    }

    fn loaded(left: &str, right: &str) -> Viewer {
        let mut v = viewer();
        v.set_text(Side::Left, left);
        v.set_text(Side::Right, right);
        v.compare().unwrap();
        v
    }

    fn key(name: &str) -> Path {
        Path::root().child(Key::name(name))
    }

    #[test]
    fn compare_stores_both_documents() {
        let v = loaded(r#"{"a":1}"#, r#"[true]"#);
        assert_eq!(v.document(Side::Left), Some(&json!({"a": 1})));
        assert_eq!(v.document(Side::Right), Some(&json!([true])));
        assert!(v.error().is_none());
        assert!(v.has_result());
    }

    #[test]
    fn extra_keys_scenario() {
        let v = loaded(r#"{"a":1,"b":2}"#, r#"{"a":1,"c":3}"#);
        let (l, r) = v.panes().unwrap();

        let a = l.line_at(&key("a")).unwrap();
        assert_eq!(a.spans[0].tone, Tone::KeyMatch);
        assert_eq!(a.spans[2].tone, Tone::ValueMatch);
        assert_eq!(l.line_at(&key("b")).unwrap().spans[0].tone, Tone::Differ(Side::Left));
        assert_eq!(r.line_at(&key("a")).unwrap().spans[2].tone, Tone::ValueMatch);
        assert_eq!(r.line_at(&key("c")).unwrap().spans[0].tone, Tone::Differ(Side::Right));
    }

    #[test]
    fn array_scenario() {
        let v = loaded("[1,2,3]", "[1,2,4]");
        let cmp = v.comparison().unwrap();
        for tree in [&cmp.left, &cmp.right] {
            let verdicts: Vec<_> = tree.root.children().iter().map(|c| c.annotation()).collect();
            assert_eq!(
                verdicts,
                vec![Some(Annotation::Match), Some(Annotation::Match), Some(Annotation::Differ)]
            );
        }
    }

    #[test]
    fn invalid_side_blocks_comparison() {
        let mut v = viewer();
        v.set_text(Side::Left, r#"{"a":1}"#);
        v.set_text(Side::Right, "{a:1}");
        let err = v.compare().unwrap_err();
        assert!(matches!(err, SessionError::InvalidJson { side: Side::Right, .. }));
        assert_eq!(v.error(), Some(INVALID_JSON_MESSAGE));
        assert!(v.document(Side::Left).is_none());
        assert!(v.panes().is_none());
        assert_eq!(v.text(Side::Left), r#"{"a":1}"#);

        v.set_text(Side::Left, r#"{"a":2}"#);
        assert_eq!(v.text(Side::Left), r#"{"a":2}"#);
    }

    #[test]
    fn failure_keeps_previous_documents_and_typing_keeps_banner() {
        let mut v = loaded("[1]", "[1]");
        v.set_text(Side::Left, "[");
        assert!(v.compare().is_err());
        assert_eq!(v.document(Side::Left), Some(&json!([1])));
        assert!(!v.has_result());

        v.set_text(Side::Left, "[2]");
        assert!(v.error().is_some());

        v.compare().unwrap();
        assert!(v.error().is_none());
        assert_eq!(v.document(Side::Left), Some(&json!([2])));
    }

    #[test]
    fn empty_input_is_invalid() {
        let mut v = viewer();
        v.set_text(Side::Right, "{}");
        assert!(matches!(
            v.compare(),
            Err(SessionError::InvalidJson { side: Side::Left, .. })
        ));
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn decode_failure_is_logged_at_warn() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut v = viewer();
            v.set_text(Side::Left, "[]");
            v.set_text(Side::Right, "{");
            assert!(v.compare().is_err());
        });

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("WARN"));
        assert!(text.contains("decode failed"));
        assert!(text.contains("side=right"));
    }

    #[test]
    fn clear_touches_one_side_only() {
        let mut v = loaded(r#"{"x":1}"#, r#"{"y":2}"#);
        v.clear(Side::Left);
        assert_eq!(v.text(Side::Left), "");
        assert!(v.document(Side::Left).is_none());
        assert_eq!(v.text(Side::Right), r#"{"y":2}"#);
        assert_eq!(v.document(Side::Right), Some(&json!({"y": 2})));
        assert!(v.panes().is_none());
    }

    #[test]
    fn copy_writes_raw_text() {
        let clipboard = MemoryClipboard::new();
        let mut v = Viewer::new(ViewerConfig::default(), Box::new(clipboard.clone()));
        v.set_text(Side::Right, "  {\"k\": [1] }\n");
        v.copy(Side::Right);
        assert_eq!(clipboard.contents().as_deref(), Some("  {\"k\": [1] }\n"));
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> SessionResult<()> {
            Err(SessionError::Clipboard("unavailable".into()))
        }
    }

    #[test]
    fn copy_failure_is_swallowed() {
        let mut v = Viewer::new(ViewerConfig::default(), Box::new(BrokenClipboard));
        v.set_text(Side::Left, "1");
        v.copy(Side::Left);
        assert_eq!(v.text(Side::Left), "1");
    }

    #[test]
    fn toggle_restores_descendants() {
        let doc = r#"{"a":{"b":{"c":1}}}"#;
        let mut v = loaded(doc, doc);
        let b = key("a").child(Key::name("b"));
        assert!(v.toggle(Side::Left, &b).unwrap());
        let (before, _) = v.panes().unwrap();

        assert!(!v.toggle_pointer(Side::Left, "/a").unwrap());
        let (collapsed, right) = v.panes().unwrap();
        assert_eq!(collapsed.lines.len(), 2);
        assert_eq!(right.lines.len(), 3);

        assert!(v.toggle_pointer(Side::Left, "/a").unwrap());
        let (after, _) = v.panes().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn toggle_needs_keys_typed_like_the_document() {
        let doc = r#"[{"x":1}]"#;
        let mut v = loaded(doc, doc);
        let before = v.panes().unwrap();

        let mistyped = Path::root().child(Key::name("0"));
        assert!(matches!(
            v.toggle(Side::Left, &mistyped),
            Err(SessionError::Diff(DiffError::PathNotFound { .. }))
        ));
        assert_eq!(v.panes().unwrap(), before);

        let typed = Path::root().child(Key::Index(0));
        assert!(!v.toggle(Side::Left, &typed).unwrap());
        assert_eq!(v.panes().unwrap().0.lines.len(), 2);
    }

    #[test]
    fn toggle_by_index_under_mapping_is_rejected() {
        let doc = r#"{"0":{"x":1}}"#;
        let mut v = loaded(doc, doc);
        assert!(matches!(
            v.toggle(Side::Right, &Path::root().child(Key::Index(0))),
            Err(SessionError::Diff(DiffError::PathNotFound { .. }))
        ));
        assert!(v.is_expanded(Side::Right, &key("0")));
    }

    #[test]
    fn toggle_errors() {
        let mut v = viewer();
        assert!(matches!(
            v.toggle_pointer(Side::Left, "/a"),
            Err(SessionError::NoDocument(Side::Left))
        ));
        let mut v = loaded(r#"{"a":1}"#, "{}");
        assert!(matches!(
            v.toggle_pointer(Side::Left, "/a"),
            Err(SessionError::Diff(DiffError::NotComposite { .. }))
        ));
        assert!(matches!(
            v.toggle(Side::Left, &key("zz")),
            Err(SessionError::Diff(DiffError::PathNotFound { .. }))
        ));
    }

    #[test]
    fn compare_resets_expand_state() {
        let doc = r#"{"a":{"b":{}}}"#;
        let mut v = loaded(doc, doc);
        v.toggle(Side::Left, &key("a")).unwrap();
        assert!(!v.is_expanded(Side::Left, &key("a")));
        v.compare().unwrap();
        assert!(v.is_expanded(Side::Left, &key("a")));
    }

    #[test]
    fn expand_and_collapse_all() {
        let doc = r#"{"a":{"b":{"c":{}}}}"#;
        let mut v = loaded(doc, doc);
        v.expand_all();
        assert_eq!(v.panes().unwrap().0.lines.len(), 4);
        v.collapse_all();
        assert_eq!(v.panes().unwrap().1.lines.len(), 1);
    }

    #[test]
    fn theme_does_not_change_result() {
        let mut v = loaded(r#"{"a":1}"#, r#"{"a":2}"#);
        let before = v.comparison();
        assert_eq!(v.toggle_theme(), Theme::Dark);
        assert_eq!(v.comparison(), before);
        let dark = v.render(false);
        v.set_theme(Theme::Light);
        assert_eq!(v.render(false), dark);
    }

    #[test]
    fn rendered_screen_shows_banner_not_result() {
        let mut v = viewer();
        v.set_text(Side::Left, "nope");
        v.set_text(Side::Right, "[]");
        let _ = v.compare();
        let text = v.render(false);
        assert!(text.contains(INVALID_JSON_MESSAGE));
        assert!(!text.contains(jtc_render::RESULT_TITLE));
        assert!(text.contains("nope"));
    }

    #[test]
    fn summary_counts() {
        let v = loaded(r#"{"a":1,"b":2}"#, r#"{"a":1,"c":3}"#);
        let s = v.summary().unwrap();
        assert_eq!(s.left.differing_keys, 1);
        assert_eq!(s.right.differing_keys, 1);
        assert!(!s.is_identical());
    }

    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i16>().prop_map(|n| json!(n)),
            "[a-c]{0,3}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-d]", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn compare_is_idempotent(left in json_value(), right in json_value()) {
            let mut v = viewer();
            v.set_text(Side::Left, left.to_string());
            v.set_text(Side::Right, right.to_string());
            v.compare().unwrap();
            let first = (v.comparison(), v.panes());
            v.compare().unwrap();
            prop_assert_eq!(first, (v.comparison(), v.panes()));
        }

        #[test]
        fn identical_documents_fully_match(doc in json_value()) {
            let text = doc.to_string();
            let v = loaded(&text, &text);
            prop_assert!(v.summary().unwrap().is_identical());
        }

        #[test]
        fn clearing_one_side_keeps_the_other(left in json_value(), right in json_value()) {
            let mut v = loaded(&left.to_string(), &right.to_string());
            v.clear(Side::Right);
            prop_assert_eq!(v.text(Side::Left), left.to_string());
            prop_assert_eq!(v.document(Side::Left), Some(&left));
        }
    }
}
