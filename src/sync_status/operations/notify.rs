//! Best-effort desktop notifications
//!
//! Mechanisms are tried in a fixed order and the first one that accepts the
//! message wins. Nothing here waits for the notification to show.

use std::collections::HashMap;

use zbus::blocking::Connection;
use zbus::names::BusName;

use crate::paths::Environment;
use crate::runner::CommandRunner;

const NOTIFICATIONS_NAME: &str = "org.freedesktop.Notifications";

pub trait Notifier {
    /// Dispatch a notification; true when some mechanism accepted it
    fn notify(&self, summary: &str, body: &str) -> bool;
}

pub struct DesktopNotifier<'a> {
    env: &'a Environment,
    runner: &'a dyn CommandRunner,
}

impl<'a> DesktopNotifier<'a> {
    pub fn new(env: &'a Environment, runner: &'a dyn CommandRunner) -> Self {
        Self { env, runner }
    }

    /// Session bus address, resolved from the captured environment the same
    /// way libdbus does
    fn session_bus_address(&self) -> Option<String> {
        if let Some(address) = self.env.var("DBUS_SESSION_BUS_ADDRESS") {
            return Some(address.to_string());
        }
        self.env
            .var("XDG_RUNTIME_DIR")
            .map(|dir| format!("unix:path={}/bus", dir))
    }

    fn session_bus(&self) -> Option<Connection> {
        let address = self.session_bus_address()?;
        zbus::blocking::connection::Builder::address(address.as_str())
            .ok()?
            .build()
            .ok()
    }

    /// org.freedesktop.Notifications on the session bus. Accepted only when
    /// the name has an owner; the Notify call itself runs detached.
    fn dbus(&self, summary: &str, body: &str) -> bool {
        let Some(conn) = self.session_bus() else {
            return false;
        };
        if !has_notification_server(&conn) {
            eprintln!("[savehook] notify - No notification server on the session bus");
            return false;
        }

        let summary = summary.to_string();
        let body = body.to_string();
        std::thread::spawn(move || {
            let Ok(proxy) = zbus::blocking::Proxy::new(
                &conn,
                NOTIFICATIONS_NAME,
                "/org/freedesktop/Notifications",
                NOTIFICATIONS_NAME,
            ) else {
                return;
            };
            let hints: HashMap<&str, zbus::zvariant::Value> = HashMap::new();
            let actions: Vec<&str> = Vec::new();
            let _: zbus::Result<u32> = proxy.call(
                "Notify",
                &(
                    "savehook",
                    0u32,
                    "dialog-warning",
                    summary.as_str(),
                    body.as_str(),
                    actions,
                    hints,
                    10_000i32,
                ),
            );
        });
        true
    }

    fn command(&self, argv: Vec<String>) -> bool {
        let Some(program) = argv.first() else {
            return false;
        };
        if self.env.find_in_path(program).is_none() {
            return false;
        }
        self.runner.spawn_detached(&argv).is_ok()
    }
}

fn has_notification_server(conn: &Connection) -> bool {
    let Ok(dbus) = zbus::blocking::fdo::DBusProxy::new(conn) else {
        return false;
    };
    let Ok(name) = BusName::try_from(NOTIFICATIONS_NAME) else {
        return false;
    };
    dbus.name_has_owner(name).unwrap_or(false)
}

/// Helper command lines in preference order
pub fn command_mechanisms(summary: &str, body: &str) -> Vec<Vec<String>> {
    let owned = |parts: &[&str]| parts.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    let zenity_text = format!("--text={}: {}", summary, body);
    let apple_script = format!(
        "display notification \"{}\" with title \"{}\"",
        body.replace('"', "'"),
        summary.replace('"', "'")
    );
    vec![
        owned(&["notify-send", "--app-name=savehook", "--urgency=critical", summary, body]),
        owned(&["kdialog", "--title", summary, "--passivepopup", body, "10"]),
        owned(&["zenity", "--notification", zenity_text.as_str()]),
        owned(&["osascript", "-e", apple_script.as_str()]),
    ]
}

impl Notifier for DesktopNotifier<'_> {
    fn notify(&self, summary: &str, body: &str) -> bool {
        if self.dbus(summary, body) {
            return true;
        }
        command_mechanisms(summary, body)
            .into_iter()
            .any(|argv| self.command(argv))
    }
}

#[cfg(test)]
pub mod fake {
    use super::Notifier;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct FakeNotifier {
        pub sent: RefCell<Vec<(String, String)>>,
    }

    impl Notifier for FakeNotifier {
        fn notify(&self, summary: &str, body: &str) -> bool {
            self.sent
                .borrow_mut()
                .push((summary.to_string(), body.to_string()));
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::fake::FakeRunner;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    #[test]
    fn test_mechanism_order() {
        let programs: Vec<String> = command_mechanisms("Sync", "Saves at 50%")
            .into_iter()
            .map(|argv| argv[0].clone())
            .collect();
        assert_eq!(programs, vec!["notify-send", "kdialog", "zenity", "osascript"]);
    }

    fn bin_dir(programs: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for program in programs {
            let path = dir.path().join(program);
            std::fs::write(&path, "#!/bin/sh\n").unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        dir
    }

    fn env_with(pairs: &[(&str, String)]) -> Environment {
        Environment {
            vars: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            cwd: PathBuf::from("/"),
        }
    }

    #[test]
    fn test_session_bus_address_resolution() {
        let runner = FakeRunner::new();

        let env = env_with(&[
            ("DBUS_SESSION_BUS_ADDRESS", "unix:path=/run/user/1000/bus".to_string()),
            ("XDG_RUNTIME_DIR", "/tmp/runtime".to_string()),
        ]);
        let notifier = DesktopNotifier::new(&env, &runner);
        assert_eq!(
            notifier.session_bus_address().as_deref(),
            Some("unix:path=/run/user/1000/bus")
        );

        let env = env_with(&[("XDG_RUNTIME_DIR", "/tmp/runtime".to_string())]);
        let notifier = DesktopNotifier::new(&env, &runner);
        assert_eq!(
            notifier.session_bus_address().as_deref(),
            Some("unix:path=/tmp/runtime/bus")
        );

        let env = env_with(&[]);
        assert_eq!(DesktopNotifier::new(&env, &runner).session_bus_address(), None);
    }

    #[test]
    fn test_unreachable_bus_falls_back_to_notify_send() {
        let dir = bin_dir(&["notify-send", "kdialog"]);
        let env = env_with(&[
            ("PATH", dir.path().display().to_string()),
            (
                "DBUS_SESSION_BUS_ADDRESS",
                format!("unix:path={}/no-such-bus", dir.path().display()),
            ),
        ]);
        let runner = FakeRunner::new();
        let notifier = DesktopNotifier::new(&env, &runner);

        assert!(notifier.notify("Sync", "Saves at 50%"));
        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][0], "notify-send");
        assert_eq!(calls[0][calls[0].len() - 1], "Saves at 50%");
    }

    #[test]
    fn test_bus_without_notification_server_falls_back() {
        use std::io::BufRead;

        // Needs a private bus daemon; nothing to check without one
        let Ok(mut daemon) = std::process::Command::new("dbus-daemon")
            .args(["--session", "--nofork", "--print-address"])
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::null())
            .spawn()
        else {
            return;
        };
        let mut address = String::new();
        if let Some(stdout) = daemon.stdout.take() {
            let _ = std::io::BufReader::new(stdout).read_line(&mut address);
        }
        if address.trim().is_empty() {
            let _ = daemon.kill();
            let _ = daemon.wait();
            return;
        }

        let dir = bin_dir(&["notify-send"]);
        let env = env_with(&[
            ("PATH", dir.path().display().to_string()),
            ("DBUS_SESSION_BUS_ADDRESS", address.trim().to_string()),
        ]);
        let runner = FakeRunner::new();
        let accepted = DesktopNotifier::new(&env, &runner).notify("Sync", "Saves at 50%");
        let _ = daemon.kill();
        let _ = daemon.wait();

        assert!(accepted);
        assert_eq!(runner.calls_with("notify-send").len(), 1);
    }

    #[test]
    fn test_no_bus_tries_helpers_in_order() {
        let dir = bin_dir(&["zenity"]);
        let env = env_with(&[("PATH", dir.path().display().to_string())]);
        let runner = FakeRunner::new();
        let notifier = DesktopNotifier::new(&env, &runner);

        assert!(notifier.notify("Sync", "Saves at 50%"));
        assert_eq!(runner.calls.borrow().len(), 1);
        assert_eq!(runner.calls.borrow()[0][0], "zenity");
    }

    #[test]
    fn test_nothing_available_reports_failure() {
        let dir = bin_dir(&[]);
        let env = env_with(&[("PATH", dir.path().display().to_string())]);
        let runner = FakeRunner::new();
        assert!(!DesktopNotifier::new(&env, &runner).notify("Sync", "Saves at 50%"));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_command_needs_program_on_path() {
        let dir = bin_dir(&["kdialog"]);
        let env = env_with(&[("PATH", dir.path().display().to_string())]);
        let runner = FakeRunner::new();
        let notifier = DesktopNotifier::new(&env, &runner);

        let argvs = command_mechanisms("Sync", "Saves at 50%");
        assert!(!notifier.command(argvs[0].clone()));
        assert!(notifier.command(argvs[1].clone()));
        assert_eq!(runner.calls.borrow().len(), 1);
        assert_eq!(runner.calls.borrow()[0][0], "kdialog");
    }
}
