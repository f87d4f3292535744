//! Height synchronisation between the embedded widget page and the
//! host page's iframe.
//!
//! The embedded page reports its rendered height to the parent window; the
//! host script applies it to the iframe (never below [`MIN_FRAME_HEIGHT`])
//! and tells the frame about width changes after a debounce. Both scripts
//! are generated here from the same constants the Rust side checks.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use url::Url;

pub const HEIGHT_MESSAGE_TYPE: &str = "safesailing-widget-height";
pub const RESIZE_MESSAGE_TYPE: &str = "safesailing-widget-resize";

/// Smallest height, in px, the host will give the iframe.
pub const MIN_FRAME_HEIGHT: u32 = 100;

pub const RESIZE_DEBOUNCE_MS: u64 = 150;

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Messages exchanged over `postMessage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WidgetMessage {
    /// frame -> host
    #[serde(rename = "safesailing-widget-height")]
    Height { height: f64 },

    /// host -> frame
    #[serde(rename = "safesailing-widget-resize")]
    Resize { width: f64 },
}

pub fn applied_height(height: f64) -> u32 {
    let floor = MIN_FRAME_HEIGHT as f64;
    height.max(floor).round() as u32
}

fn is_local(url: &Url) -> bool {
    url.host_str().is_some_and(|host| LOCAL_HOSTS.contains(&host))
}

/// `true` when a message from `message_origin` may resize a frame served
/// from `frame_origin`. Origins that do not parse as URLs are refused.
pub fn origin_allowed(message_origin: &str, frame_origin: &str) -> bool {
    let Ok(message) = Url::parse(message_origin) else {
        return false;
    };
    let frame = Url::parse(frame_origin).ok();

    if frame.as_ref().is_some_and(|f| f.origin() == message.origin()) {
        return true;
    }
    is_local(&message) || frame.as_ref().is_some_and(is_local)
}

/// Host-side view of one embedded frame.
#[derive(Debug, Clone)]
pub struct HostFrame {
    frame_origin: String,
    height: Option<u32>,
}

impl HostFrame {
    pub fn new(frame_origin: impl Into<String>) -> Self {
        Self {
            frame_origin: frame_origin.into(),
            height: None,
        }
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// Process one incoming `message` event.
    ///
    /// Returns the height now applied, or `None` when the event was
    /// ignored (foreign origin, unparsable payload, other message type).
    pub fn handle(&mut self, origin: &str, raw: &str) -> Option<u32> {
        if !origin_allowed(origin, &self.frame_origin) {
            return None;
        }

        match serde_json::from_str::<WidgetMessage>(raw) {
            Ok(WidgetMessage::Height { height }) if height.is_finite() => {
                let applied = applied_height(height);
                self.height = Some(applied);
                Some(applied)
            }
            _ => None,
        }
    }
}

/// Trailing-edge debounce for window resize events.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(Instant, f64)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(RESIZE_DEBOUNCE_MS))
    }
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// A resize event restarts the timer.
    pub fn on_resize(&mut self, now: Instant, width: f64) {
        self.pending = Some((now + self.delay, width));
    }

    /// The message to post once the window has been quiet long enough.
    pub fn poll(&mut self, now: Instant) -> Option<WidgetMessage> {
        match self.pending {
            Some((due, width)) if now >= due => {
                self.pending = None;
                Some(WidgetMessage::Resize { width })
            }
            _ => None,
        }
    }
}

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

pub fn iframe_snippet(base_url: &str) -> String {
    format!(
        r#"<iframe src="{}/embed" style="width:100%; height:auto; border:none; overflow:hidden;" scrolling="no"></iframe>"#,
        trim_base(base_url)
    )
}

pub fn script_snippet(base_url: &str) -> String {
    format!(r#"<script src="{}/embed.js" async></script>"#, trim_base(base_url))
}

/// Host script served at `/embed.js`.
pub fn embed_script(base_url: &str) -> String {
    let base = serde_json::to_string(trim_base(base_url)).unwrap_or_else(|_| "\"\"".into());
    let hosts = serde_json::to_string(&LOCAL_HOSTS).unwrap_or_else(|_| "[]".into());

    format!(
        r##"(function () {{
  var BASE_URL = {base};
  var HEIGHT_TYPE = "{HEIGHT_MESSAGE_TYPE}";
  var RESIZE_TYPE = "{RESIZE_MESSAGE_TYPE}";
  var MIN_HEIGHT = {MIN_FRAME_HEIGHT};
  var DEBOUNCE_MS = {RESIZE_DEBOUNCE_MS};
  var LOCAL_HOSTS = {hosts};

  function hostOf(origin) {{
    try {{ return new URL(origin).hostname; }} catch (e) {{ return ""; }}
  }}

  function originOf(url) {{
    try {{ return new URL(url).origin; }} catch (e) {{ return ""; }}
  }}

  function originAllowed(messageOrigin, frameOrigin) {{
    var origin = originOf(messageOrigin);
    if (!origin) return false;
    if (origin === originOf(frameOrigin)) return true;
    return LOCAL_HOSTS.indexOf(hostOf(messageOrigin)) !== -1 ||
      LOCAL_HOSTS.indexOf(hostOf(frameOrigin)) !== -1;
  }}

  function mount() {{
    var container = document.createElement("div");
    container.className = "safesailing-alert-container";
    container.style.width = "100%";
    container.style.margin = "0";
    container.style.padding = "0";
    container.style.overflow = "hidden";

    var iframe = document.createElement("iframe");
    iframe.src = BASE_URL + "/embed";
    iframe.style.width = "100%";
    iframe.style.border = "none";
    iframe.style.overflow = "hidden";
    iframe.style.height = MIN_HEIGHT + "px";
    iframe.scrolling = "no";
    var frameOrigin = new URL(iframe.src, window.location.href).origin;

    window.addEventListener("message", function (event) {{
      if (!originAllowed(event.origin, frameOrigin)) return;
      var data = event.data;
      if (!data || data.type !== HEIGHT_TYPE) return;
      var height = Number(data.height);
      if (!isFinite(height)) return;
      iframe.style.height = Math.max(height, MIN_HEIGHT) + "px";
    }});

    var timer = null;
    window.addEventListener("resize", function () {{
      if (timer) clearTimeout(timer);
      timer = setTimeout(function () {{
        timer = null;
        if (!iframe.contentWindow) return;
        iframe.contentWindow.postMessage(
          {{ type: RESIZE_TYPE, width: window.innerWidth }},
          frameOrigin
        );
      }}, DEBOUNCE_MS);
    }});

    container.appendChild(iframe);

    var selectors = [
      "#alert", ".alert", "[id*=\"alert\"]", "[class*=\"alert\"]",
      "#notification", ".notification", "[id*=\"notification\"]", "[class*=\"notification\"]",
      "header", ".header", "#header", "body"
    ];
    var target = null;
    for (var i = 0; i < selectors.length && !target; i++) {{
      target = document.querySelector(selectors[i]);
    }}
    if (!target || target.tagName.toLowerCase() === "body") {{
      document.body.insertBefore(container, document.body.firstChild);
    }} else {{
      target.insertBefore(container, target.firstChild);
    }}
  }}

  if (document.readyState === "loading") {{
    document.addEventListener("DOMContentLoaded", mount);
  }} else {{
    mount();
  }}
}})();
"##
    )
}

/// Page served at `/embed`: the rendered widget plus the script that
/// reports its height to the parent window.
pub fn embed_page(widget_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>SafeSailing alert</title>
<style>
  html, body {{ margin: 0; padding: 0; background: transparent; }}
  .embed-widget-container {{ overflow: hidden; }}
  .alert-widget {{ position: relative; overflow: hidden; color: #fff; max-width: 32rem; margin: 1rem auto; }}
  .alert-widget h3 {{ margin: 0; font-size: 1.125rem; font-weight: 600; }}
  .alert-widget p {{ margin: 0.25rem 0 0; }}
  .alert-body {{ position: relative; z-index: 1; display: flex; gap: 0.75rem; align-items: flex-start; }}
  .alert-times div {{ font-size: 0.875rem; }}
  .animate-fade-in {{ animation: fade-in 0.5s ease-out; }}
  .animate-slide-up {{ animation: slide-up 0.5s ease-out; }}
  .wave-animation {{
    position: absolute; left: 0; right: 0; bottom: 0; height: 6px;
    background: var(--wave-color); opacity: 0.6;
    animation: wave 3s ease-in-out infinite;
  }}
  @keyframes fade-in {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}
  @keyframes slide-up {{ from {{ transform: translateY(12px); opacity: 0; }} to {{ transform: none; opacity: 1; }} }}
  @keyframes wave {{ 0%, 100% {{ transform: translateX(-25%); }} 50% {{ transform: translateX(25%); }} }}
</style>
</head>
<body>
<div id="safesailing-root" class="embed-widget-container">{widget_html}</div>
<script>
(function () {{
  var HEIGHT_TYPE = "{HEIGHT_MESSAGE_TYPE}";
  var RESIZE_TYPE = "{RESIZE_MESSAGE_TYPE}";
  var root = document.getElementById("safesailing-root");

  function report() {{
    if (window.parent === window) return;
    window.parent.postMessage(
      {{ type: HEIGHT_TYPE, height: Math.ceil(root.getBoundingClientRect().height) }},
      "*"
    );
  }}

  if (typeof ResizeObserver !== "undefined") {{
    new ResizeObserver(report).observe(root);
  }}
  window.addEventListener("message", function (event) {{
    if (event.data && event.data.type === RESIZE_TYPE) report();
  }});
  report();
}})();
</script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_floor() {
        assert_eq!(applied_height(42.0), 100);
        assert_eq!(applied_height(250.0), 250);
        assert_eq!(applied_height(100.0), 100);
    }

    #[test]
    fn message_wire_shape() {
        let raw = r#"{"type":"safesailing-widget-height","height":250}"#;
        let msg: WidgetMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(msg, WidgetMessage::Height { height: 250.0 });

        let out = serde_json::to_value(WidgetMessage::Resize { width: 640.0 }).unwrap();
        assert_eq!(out["type"], RESIZE_MESSAGE_TYPE);
        assert_eq!(out["width"], 640.0);
    }

    #[test]
    fn origin_rules() {
        let frame = "https://alerts.example.com";
        assert!(origin_allowed(frame, frame));
        assert!(!origin_allowed("https://evil.example.net", frame));
        assert!(origin_allowed("http://localhost:5173", frame));
        assert!(origin_allowed("https://evil.example.net", "http://127.0.0.1:8080"));
        assert!(!origin_allowed("https://localhost.evil.net", frame));
    }

    #[test]
    fn local_hosts_match_case_insensitively() {
        let frame = "https://alerts.example.com";
        assert!(origin_allowed("http://LocalHost:5173", frame));
        assert!(origin_allowed(frame, "HTTP://LOCALHOST:8787"));
        assert!(origin_allowed("https://Alerts.Example.com", frame));
    }

    #[test]
    fn unparseable_origins_are_refused() {
        let frame = "https://alerts.example.com";
        assert!(!origin_allowed("null", frame));
        assert!(!origin_allowed("", frame));
        assert!(!origin_allowed("localhost", frame));
    }

    #[test]
    fn host_frame_last_message_wins() {
        let origin = "https://alerts.example.com";
        let mut frame = HostFrame::new(origin);

        assert_eq!(
            frame.handle(origin, r#"{"type":"safesailing-widget-height","height":42}"#),
            Some(100)
        );
        assert_eq!(
            frame.handle(origin, r#"{"type":"safesailing-widget-height","height":310}"#),
            Some(310)
        );
        assert_eq!(frame.height(), Some(310));
    }

    #[test]
    fn host_frame_ignores_noise() {
        let origin = "https://alerts.example.com";
        let mut frame = HostFrame::new(origin);
        frame.handle(origin, r#"{"type":"safesailing-widget-height","height":200}"#);

        assert_eq!(frame.handle(origin, "not json"), None);
        assert_eq!(frame.handle(origin, r#"{"type":"other","height":5}"#), None);
        assert_eq!(frame.handle(origin, r#"{"type":"safesailing-widget-height"}"#), None);
        assert_eq!(
            frame.handle(
                "https://evil.example.net",
                r#"{"type":"safesailing-widget-height","height":900}"#
            ),
            None
        );
        assert_eq!(frame.height(), Some(200));
    }

    #[test]
    fn resize_is_debounced() {
        let mut d = ResizeDebouncer::default();
        let t0 = Instant::now();

        d.on_resize(t0, 800.0);
        d.on_resize(t0 + Duration::from_millis(100), 640.0);
        assert_eq!(d.poll(t0 + Duration::from_millis(200)), None);

        let fired = d.poll(t0 + Duration::from_millis(250));
        assert_eq!(fired, Some(WidgetMessage::Resize { width: 640.0 }));
        assert_eq!(d.poll(t0 + Duration::from_millis(400)), None);
    }

    #[test]
    fn generated_code_uses_shared_constants() {
        let js = embed_script("https://alerts.example.com/");
        assert!(js.contains(r#"var BASE_URL = "https://alerts.example.com";"#));
        assert!(js.contains(HEIGHT_MESSAGE_TYPE));
        assert!(js.contains("var MIN_HEIGHT = 100;"));
        assert!(js.contains("var DEBOUNCE_MS = 150;"));

        let page = embed_page("<p>hi</p>");
        assert!(page.contains("<p>hi</p>"));
        assert!(page.contains("ResizeObserver"));

        assert_eq!(
            script_snippet("https://a.example"),
            r#"<script src="https://a.example/embed.js" async></script>"#
        );
        assert!(iframe_snippet("https://a.example/").contains(r#"src="https://a.example/embed""#));
    }
}
