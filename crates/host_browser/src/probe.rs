//! User-agent based form-factor probes for browser and embedded-webview builds.

use host_contract::{FormFactorDescriptor, FormFactorKind, FormFactorService};

/// Reads the navigator user-agent string, or an empty string off-target.
fn user_agent() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.navigator().user_agent().ok())
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

fn is_mobile_agent(agent: &str) -> bool {
    let lowered = agent.to_ascii_lowercase();
    ["android", "iphone", "ipad", "mobile"]
        .iter()
        .any(|marker| lowered.contains(marker))
}

fn platform_label(agent: &str) -> &'static str {
    let lowered = agent.to_ascii_lowercase();
    if lowered.contains("android") {
        "android"
    } else if lowered.contains("iphone") || lowered.contains("ipad") {
        "ios"
    } else if lowered.contains("windows") {
        "windows"
    } else if lowered.contains("mac os") || lowered.contains("macintosh") {
        "macos"
    } else if lowered.contains("linux") {
        "linux"
    } else if lowered.is_empty() {
        "unknown"
    } else {
        "web"
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Stand-alone browser probe: always reports the browser form factor.
pub struct BrowserFormFactor;

impl FormFactorService for BrowserFormFactor {
    fn form_factor(&self) -> FormFactorDescriptor {
        let agent = user_agent();
        FormFactorDescriptor::new(FormFactorKind::Browser, platform_label(&agent))
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Embedded-webview probe: reports the native shell's device class.
pub struct WebViewFormFactor;

impl FormFactorService for WebViewFormFactor {
    fn form_factor(&self) -> FormFactorDescriptor {
        let agent = user_agent();
        let kind = if is_mobile_agent(&agent) {
            FormFactorKind::Mobile
        } else {
            FormFactorKind::Desktop
        };
        FormFactorDescriptor::new(kind, platform_label(&agent))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mobile_markers_are_detected_case_insensitively() {
        assert!(is_mobile_agent("Mozilla/5.0 (Linux; Android 14)"));
        assert!(is_mobile_agent("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)"));
        assert!(!is_mobile_agent("Mozilla/5.0 (X11; Linux x86_64)"));
        assert!(!is_mobile_agent(""));
    }

    #[test]
    fn platform_labels_cover_the_common_agents() {
        assert_eq!(platform_label("Mozilla/5.0 (Windows NT 10.0)"), "windows");
        assert_eq!(platform_label("Mozilla/5.0 (Macintosh; Intel Mac OS X)"), "macos");
        assert_eq!(platform_label("Mozilla/5.0 (X11; Linux x86_64)"), "linux");
        assert_eq!(platform_label("Mozilla/5.0 (Linux; Android 14)"), "android");
        assert_eq!(platform_label(""), "unknown");
        assert_eq!(platform_label("SomethingElse/1.0"), "web");
    }

    #[test]
    fn probes_disagree_on_kind_but_never_overlap() {
        // Off-target the agent is empty: the browser probe still reports the
        // browser class and the webview probe falls back to desktop.
        let browser: &dyn FormFactorService = &BrowserFormFactor;
        let webview: &dyn FormFactorService = &WebViewFormFactor;
        assert_eq!(browser.form_factor().kind, FormFactorKind::Browser);
        assert_eq!(webview.form_factor().kind, FormFactorKind::Desktop);
    }
}
