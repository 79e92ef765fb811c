//! Integration tests for the wifi configuration pass
//!
//! These tests drive the full pass against a recording command runner and
//! verify:
//! - command ordering across broadcast and hotspot cards
//! - per-step and per-card failure independence for broadcast links
//! - hotspot exclusivity, abort semantics, and band selection
//! - status messages emitted on every anomaly

use sky_wifi::{CardReport, HotspotOutcome, StatusLevel, StatusReporter, WifiConfigurator};

// ============================================================================
// Helper Functions
// ============================================================================

mod helpers {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use serde_json::json;
    use sky_wifi::{
        CommandRunner, PassReport, StatusMessage, StatusReporter, WifiConfigurator, WifiSettings,
    };
    use tokio::sync::mpsc::UnboundedReceiver;

    /// Command runner that records every argument vector and fails the
    /// invocations it was told to fail
    #[derive(Clone, Default)]
    pub struct RecordingRunner {
        calls: Arc<Mutex<Vec<Vec<String>>>>,
        failures: Arc<Vec<Vec<String>>>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a runner that fails exactly the given argument vectors
        pub fn failing_on(failures: Vec<Vec<String>>) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                failures: Arc::new(failures),
            }
        }

        /// Every recorded invocation, program first
        pub fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommandRunner for RecordingRunner {
        async fn run(&self, program: &str, args: &[String]) -> bool {
            let mut argv = vec![program.to_string()];
            argv.extend(args.iter().cloned());
            let ok = !self.failures.iter().any(|failure| *failure == argv);
            self.calls.lock().unwrap().push(argv);
            ok
        }
    }

    pub fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    /// Manifest entry for a broadcast link card
    pub fn link_card(name: &str, supports_5ghz: bool) -> serde_json::Value {
        card(name, true, supports_5ghz, false)
    }

    /// Manifest entry for a hotspot candidate card
    pub fn hotspot_card(name: &str, supports_5ghz: bool, supports_hotspot: bool) -> serde_json::Value {
        card(name, false, supports_5ghz, supports_hotspot)
    }

    fn card(
        name: &str,
        supports_injection: bool,
        supports_5ghz: bool,
        supports_hotspot: bool,
    ) -> serde_json::Value {
        json!({
            "name": name,
            "type": "ath9k_htc",
            "mac": "00:11:22:33:44:55",
            "supports_5ghz": supports_5ghz,
            "supports_2ghz": !supports_5ghz,
            "supports_injection": supports_injection,
            "supports_hotspot": supports_hotspot,
            "supports_rts": false,
        })
    }

    pub fn manifest(cards: &[serde_json::Value]) -> serde_json::Value {
        json!({ "hotspot": "internal", "cards": cards })
    }

    fn write_manifest(test: &str, value: &serde_json::Value) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "sky-wifi-{}-{test}.json",
            std::process::id()
        ));
        std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
        path
    }

    pub fn settings_for(manifest_path: PathBuf) -> WifiSettings {
        WifiSettings {
            manifest_path,
            ..WifiSettings::default()
        }
    }

    pub fn drain_status(rx: &mut UnboundedReceiver<StatusMessage>) -> Vec<StatusMessage> {
        let mut messages = Vec::new();
        while let Ok(message) = rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    /// Write the manifest, run one pass, and collect the status messages
    pub async fn run_pass(
        test: &str,
        manifest_doc: &serde_json::Value,
        runner: RecordingRunner,
    ) -> (PassReport, Vec<StatusMessage>) {
        let path = write_manifest(test, manifest_doc);
        let (status, mut rx) = StatusReporter::channel();
        let report = WifiConfigurator::new(settings_for(path), runner, status)
            .run()
            .await;
        let messages = drain_status(&mut rx);
        (report, messages)
    }
}

use helpers::{argv, drain_status, hotspot_card, link_card, manifest, run_pass, RecordingRunner};

// ============================================================================
// Full Pass Tests
// ============================================================================

#[tokio::test]
async fn full_pass_runs_expected_commands_in_order() {
    let doc = manifest(&[link_card("wlan0", true), hotspot_card("wlan1", false, true)]);
    let runner = RecordingRunner::new();

    let (report, _) = run_pass("full-pass", &doc, runner.clone()).await;

    assert_eq!(
        runner.calls(),
        vec![
            argv(&["ip", "link", "set", "dev", "wlan0", "down"]),
            argv(&["iw", "dev", "wlan0", "set", "monitor", "otherbss"]),
            argv(&["ip", "link", "set", "dev", "wlan0", "up"]),
            argv(&["iw", "dev", "wlan0", "set", "freq", "5745"]),
            argv(&["iw", "dev", "wlan0", "set", "txpower", "fixed", "3100"]),
            argv(&["ifconfig", "wlan1", "192.168.2.1", "up"]),
            argv(&[
                "/bin/bash",
                "/usr/local/share/skylink/wifi_hotspot.sh",
                "g",
                "11",
                "wlan1",
                "3100",
            ]),
        ]
    );
    assert_eq!(report.broadcast_cards, ["wlan0"]);
    assert!(report.hotspot.is_configured());
    assert_eq!(report.cards.len(), 2);
}

#[tokio::test]
async fn frequency_follows_band_support() {
    let doc = manifest(&[link_card("wlan0", true), link_card("wlan1", false)]);
    let runner = RecordingRunner::new();

    run_pass("frequency-bands", &doc, runner.clone()).await;

    let calls = runner.calls();
    assert!(calls.contains(&argv(&["iw", "dev", "wlan0", "set", "freq", "5745"])));
    assert!(calls.contains(&argv(&["iw", "dev", "wlan1", "set", "freq", "2437"])));
}

// ============================================================================
// Broadcast Link Failure Independence
// ============================================================================

#[tokio::test]
async fn failing_step_does_not_stop_card_or_siblings() {
    let doc = manifest(&[link_card("wlan0", true), link_card("wlan1", true)]);
    let runner = RecordingRunner::failing_on(vec![argv(&[
        "iw", "dev", "wlan0", "set", "monitor", "otherbss",
    ])]);

    let (report, messages) = run_pass("link-independence", &doc, runner.clone()).await;

    // All five steps of both cards still ran
    let calls = runner.calls();
    assert_eq!(calls.len(), 10);
    assert!(calls.contains(&argv(&["iw", "dev", "wlan0", "set", "freq", "5745"])));
    assert!(calls.contains(&argv(&["iw", "dev", "wlan1", "set", "txpower", "fixed", "3100"])));

    // Both cards recorded active despite the partial failure
    assert_eq!(report.broadcast_cards, ["wlan0", "wlan1"]);

    match &report.cards[0] {
        CardReport::BroadcastLink { steps, .. } => {
            assert_eq!(steps.len(), 5);
            assert!(steps[0].ok);
            assert!(!steps[1].ok);
            assert!(steps[2].ok);
        }
        other => panic!("expected broadcast link report, got {other:?}"),
    }

    let warnings: Vec<_> = messages
        .iter()
        .filter(|message| message.level == StatusLevel::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("wlan0"));
    assert!(warnings[0].message.contains("monitor-mode"));
}

// ============================================================================
// Hotspot Tests
// ============================================================================

#[tokio::test]
async fn second_hotspot_candidate_is_a_noop() {
    let doc = manifest(&[
        hotspot_card("wlan0", false, true),
        hotspot_card("wlan1", false, true),
    ]);
    let runner = RecordingRunner::new();

    let (report, messages) = run_pass("hotspot-exclusivity", &doc, runner.clone()).await;

    // Only the first candidate produced command invocations
    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|call| call.contains(&"wlan0".to_string())));

    assert!(report.hotspot.is_configured());
    match &report.cards[1] {
        CardReport::Hotspot { outcome, steps, .. } => {
            assert_eq!(*outcome, HotspotOutcome::AlreadyConfigured);
            assert!(steps.is_empty());
        }
        other => panic!("expected hotspot report, got {other:?}"),
    }

    assert!(messages
        .iter()
        .any(|message| message.level == StatusLevel::Info
            && message.message.contains("skipping wlan1")));
}

#[tokio::test]
async fn hotspot_address_failure_aborts_without_setting_flag() {
    let doc = manifest(&[hotspot_card("wlan0", false, true)]);
    let runner =
        RecordingRunner::failing_on(vec![argv(&["ifconfig", "wlan0", "192.168.2.1", "up"])]);

    let (report, messages) = run_pass("hotspot-address-failure", &doc, runner.clone()).await;

    // The enablement script never ran
    assert_eq!(runner.calls().len(), 1);
    assert!(!report.hotspot.is_configured());

    match &report.cards[0] {
        CardReport::Hotspot { outcome, .. } => {
            assert_eq!(*outcome, HotspotOutcome::AddressFailed);
        }
        other => panic!("expected hotspot report, got {other:?}"),
    }

    assert!(messages
        .iter()
        .any(|message| message.level == StatusLevel::Warning));
}

#[tokio::test]
async fn hotspot_enable_failure_leaves_flag_unset() {
    let doc = manifest(&[hotspot_card("wlan0", false, true)]);
    let runner = RecordingRunner::failing_on(vec![argv(&[
        "/bin/bash",
        "/usr/local/share/skylink/wifi_hotspot.sh",
        "g",
        "11",
        "wlan0",
        "3100",
    ])]);

    let (report, _) = run_pass("hotspot-enable-failure", &doc, runner.clone()).await;

    assert_eq!(runner.calls().len(), 2);
    assert!(!report.hotspot.is_configured());
    match &report.cards[0] {
        CardReport::Hotspot { outcome, .. } => {
            assert_eq!(*outcome, HotspotOutcome::EnableFailed);
        }
        other => panic!("expected hotspot report, got {other:?}"),
    }
}

#[tokio::test]
async fn five_ghz_hotspot_uses_band_a_channel_165() {
    let doc = manifest(&[hotspot_card("wlan0", true, true)]);
    let runner = RecordingRunner::new();

    let (report, _) = run_pass("hotspot-band-a", &doc, runner.clone()).await;

    assert!(report.hotspot.is_configured());
    assert_eq!(
        runner.calls()[1],
        argv(&[
            "/bin/bash",
            "/usr/local/share/skylink/wifi_hotspot.sh",
            "a",
            "165",
            "wlan0",
            "3100",
        ])
    );
}

#[tokio::test]
async fn unsupported_hotspot_card_is_reported_but_attempted() {
    let doc = manifest(&[hotspot_card("wlan0", false, false)]);
    let runner = RecordingRunner::new();

    let (report, messages) = run_pass("hotspot-unsupported", &doc, runner.clone()).await;

    // Soft capability mismatch: reported, then configured anyway
    assert!(messages
        .iter()
        .any(|message| message.level == StatusLevel::Info
            && message.message.contains("not supported")));
    assert_eq!(runner.calls().len(), 2);
    assert!(report.hotspot.is_configured());
}

// ============================================================================
// Manifest Failure Tests
// ============================================================================

#[tokio::test]
async fn missing_manifest_emits_one_emergency_and_no_commands() {
    let runner = RecordingRunner::new();
    let path = std::env::temp_dir().join(format!(
        "sky-wifi-missing-manifest-{}",
        std::process::id()
    ));
    let (status, mut rx) = StatusReporter::channel();

    let report = WifiConfigurator::new(helpers::settings_for(path), runner.clone(), status)
        .run()
        .await;

    assert!(runner.calls().is_empty());
    assert!(report.cards.is_empty());
    assert!(report.broadcast_cards.is_empty());
    assert!(!report.hotspot.is_configured());

    let messages = drain_status(&mut rx);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].level, StatusLevel::Emergency);
}

#[tokio::test]
async fn manifest_without_cards_key_configures_nothing() {
    let doc = serde_json::json!({ "hotspot": "internal" });
    let runner = RecordingRunner::new();

    let (report, messages) = run_pass("no-cards-key", &doc, runner.clone()).await;

    assert!(runner.calls().is_empty());
    assert!(report.cards.is_empty());

    let emergencies: Vec<_> = messages
        .iter()
        .filter(|message| message.level == StatusLevel::Emergency)
        .collect();
    assert_eq!(emergencies.len(), 1);
}
