use std::sync::{Arc, Mutex};

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use nutri_onboard::config::AppConfig;
use nutri_onboard::gesture::CountingListenerHost;
use nutri_onboard::host::{HostBridge, RootStyle, SimulatedHost, init_host};
use nutri_onboard::onboarding::{
    OnboardingManager, OnboardingRouteState, Wizard, WizardEvent, onboarding_routes,
};
use nutri_onboard::replay::{Command, parse_command};

/// Viewport height of the simulated document.
const SIMULATED_INNER_HEIGHT: f32 = 640.0;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env().context("Failed to read configuration")?;

    eprintln!("🥗 Nutri Onboard v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Host: simulated v{} ({})", config.host_version, config.color_scheme);
    if let Some(port) = config.http_port {
        eprintln!("   Status API: http://0.0.0.0:{}/api/onboarding/status", port);
        eprintln!("   Profile API: http://0.0.0.0:{}/api/onboarding/profile", port);
    }
    eprintln!("   Type commands (e.g. `measure slider 0 300 50`, `handle down 0`). `quit` to exit.\n");

    // ── Host ────────────────────────────────────────────────────────────
    let host = Arc::new(
        SimulatedHost::new(&config.host_version).with_color_scheme(config.color_scheme),
    );
    let document = Arc::new(Mutex::new(RootStyle::new(SIMULATED_INNER_HEIGHT)));
    let session = init_host(
        Some(Arc::clone(&host) as Arc<dyn HostBridge>),
        Arc::clone(&document),
    );
    eprintln!(
        "   Theme: {} / swipe protection: {:?}",
        session.colors.color_scheme, session.swipe
    );

    // ── Wizard ──────────────────────────────────────────────────────────
    let listeners = CountingListenerHost::new();
    let wizard = Wizard::new(config.gesture, config.defaults).with_listeners(listeners.clone());
    let manager = OnboardingManager::new(wizard);

    // ── Status routes ───────────────────────────────────────────────────
    if let Some(port) = config.http_port {
        let app = onboarding_routes(OnboardingRouteState {
            manager: Arc::clone(&manager),
        });
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
            .await
            .with_context(|| format!("Failed to bind status port {port}"))?;
        tokio::spawn(async move {
            tracing::info!(port, "Onboarding status server started");
            axum::serve(listener, app).await.ok();
        });
    }

    // Print transitions as they happen
    let mut events = manager.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                WizardEvent::Transition { transition } => eprintln!(
                    "➡️  {} → {} ({})",
                    transition.from, transition.to, transition.result
                ),
                WizardEvent::Completed { profile } => {
                    eprintln!("✅ Onboarding complete: {}", profile.summary())
                }
            }
        }
    });

    // ── Input ───────────────────────────────────────────────────────────
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => break, // EOF
                Err(e) => {
                    tracing::error!("Error reading stdin: {}", e);
                    break;
                }
            }
        }
    });

    eprint!("> ");
    while let Some(line) = rx.recv().await {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(nutri_onboard::error::ReplayError::Empty) => {
                eprint!("> ");
                continue;
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                eprint!("> ");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Status => {
                let status = manager.get_status().await;
                println!("{}", serde_json::to_string_pretty(&status)?);
            }
            Command::Action(action) => {
                if let Err(e) = manager.dispatch(action).await {
                    eprintln!("❌ {}", e);
                }
            }
        }
        tokio::task::yield_now().await;
        eprint!("> ");
    }

    eprintln!();
    tracing::info!(
        live_listeners = listeners.live(),
        attached_total = listeners.attached_total(),
        "Input closed"
    );
    if let Some(profile) = manager.completed_profile().await {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    }

    Ok(())
}
