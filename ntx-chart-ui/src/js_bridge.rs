//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js and Leaflet are loaded from a CDN at startup, and the helper
//! functions in `assets/js/*.js` are evaluated as globals once both
//! libraries are ready. Calls made before that are queued on
//! `window.__ntxPending` and flushed in order, so a destroy issued before a
//! draw can never run after it.

use ntx_view::chart::{ChartBackend, ChartSpec};
use wasm_bindgen::JsValue;

// Embed the helper scripts at compile time
static TAXI_CHARTS_JS: &str = include_str!("../assets/js/taxi-charts.js");
static HOTSPOT_MAP_JS: &str = include_str!("../assets/js/hotspot-map.js");

pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[NTX] JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log_js_error("eval", &e);
    }
}

fn log_js_error(context: &str, err: &JsValue) {
    log::warn!("{} failed: {:?}", context, err);
    web_sys::console::warn_2(&format!("[NTX] {} failed:", context).into(), err);
}

/// Wrap `code` so it runs now if the libraries are ready, or once they are.
pub fn when_ready_script(code: &str) -> String {
    format!(
        "(function() {{ \
            var run = function() {{ {code} }}; \
            if (window.__ntxChartsReady) {{ run(); }} \
            else {{ (window.__ntxPending = window.__ntxPending || []).push(run); }} \
        }})();"
    )
}

/// Inject the Chart.js and Leaflet tags, then evaluate the helper scripts
/// at global scope once both globals exist. Safe to call more than once.
pub fn init_charts() {
    let scripts = [TAXI_CHARTS_JS, HOTSPOT_MAP_JS].join("\n");
    let scripts_json = serde_json::to_string(&scripts).unwrap_or_default();

    call_js(&format!(
        r#"
        (function() {{
            if (window.__ntxInitStarted) {{ return; }}
            window.__ntxInitStarted = true;
            window.__ntxScripts = {scripts_json};

            var css = document.createElement('link');
            css.rel = 'stylesheet';
            css.href = '{LEAFLET_CSS_URL}';
            document.head.appendChild(css);
            ['{CHART_JS_URL}', '{LEAFLET_JS_URL}'].forEach(function(src) {{
                var tag = document.createElement('script');
                tag.src = src;
                document.head.appendChild(tag);
            }});

            var waitForLibs = setInterval(function() {{
                if (typeof Chart !== 'undefined' && typeof L !== 'undefined') {{
                    clearInterval(waitForLibs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__ntxScripts);
                    delete window.__ntxScripts;
                    window.__ntxChartsReady = true;
                    var pending = window.__ntxPending || [];
                    window.__ntxPending = [];
                    pending.forEach(function(run) {{
                        try {{ run(); }} catch(e) {{ console.error('[NTX] deferred call failed:', e); }}
                    }});
                    console.log('[NTX] charts initialized');
                }}
            }}, 100);
        }})();
        "#
    ));
}

/// Script that draws `config` on the canvas `canvas_id`.
pub fn render_chart_script(canvas_id: &str, config: &serde_json::Value) -> String {
    when_ready_script(&format!(
        "window.renderTaxiChart({}, {});",
        js_string(canvas_id),
        config
    ))
}

/// Script that destroys the chart on `canvas_id`, if there is one.
pub fn destroy_chart_script(canvas_id: &str) -> String {
    when_ready_script(&format!("window.destroyTaxiChart({});", js_string(canvas_id)))
}

/// Draw a Chart.js chart from a full config object.
pub fn render_chart(canvas_id: &str, config: &serde_json::Value) {
    call_js(&render_chart_script(canvas_id, config));
}

pub fn destroy_chart(canvas_id: &str) {
    call_js(&destroy_chart_script(canvas_id));
}

/// Create the Leaflet hotspot map in `container_id`.
pub fn render_hotspot_map(container_id: &str, config: &serde_json::Value) {
    call_js(&when_ready_script(&format!(
        "window.renderHotspotMap({}, {});",
        js_string(container_id),
        config
    )));
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// `ChartBackend` that draws through Chart.js. A chart is identified by the
/// id of its canvas.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsChartBackend;

impl ChartBackend for JsChartBackend {
    type Handle = String;

    fn draw(&mut self, canvas_id: &str, spec: &ChartSpec) -> String {
        render_chart(canvas_id, &spec.to_chartjs_config());
        canvas_id.to_string()
    }

    fn destroy(&mut self, handle: String) {
        destroy_chart(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_script_embeds_id_and_config() {
        let script = render_chart_script("fare-by-hour-chart", &json!({"type": "line"}));
        assert!(script.contains(r#"window.renderTaxiChart("fare-by-hour-chart", {"type":"line"});"#));
        assert!(script.contains("window.__ntxPending"));
    }

    #[test]
    fn ids_are_quoted_safely() {
        let script = destroy_chart_script("it's");
        assert!(script.contains(r#"window.destroyTaxiChart("it's");"#));
    }

    #[test]
    fn helper_scripts_define_entry_points() {
        assert!(TAXI_CHARTS_JS.contains("function renderTaxiChart"));
        assert!(TAXI_CHARTS_JS.contains("function destroyTaxiChart"));
        assert!(HOTSPOT_MAP_JS.contains("function renderHotspotMap"));
    }
}
