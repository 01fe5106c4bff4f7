use crate::error::ShellError;
use std::ffi::{OsStr, OsString};
use std::process::{Child, Command, Stdio};

/// Launcher for the platform's "open with default application" program.
///
/// The program is started with any fixed leading arguments followed by the
/// user's arguments, unmodified. It is never waited on: finished children
/// are collected with non-blocking polls in [`Opener::reap`] so they do not
/// linger as zombies, and their exit status is discarded.
#[derive(Debug)]
pub struct Opener {
    program: OsString,
    leading_args: Vec<OsString>,
    children: Vec<Child>,
}

impl Default for Opener {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl Opener {
    /// Opener running `program` with the targets as its only arguments.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Arguments inserted before the user's targets.
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// `open` on macOS, `cmd /C start ""` on Windows, `xdg-open` elsewhere.
    #[cfg(target_os = "macos")]
    pub fn platform_default() -> Self {
        Self::new("open")
    }

    #[cfg(windows)]
    pub fn platform_default() -> Self {
        Self::new("cmd").with_leading_args(["/C", "start", ""])
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    pub fn platform_default() -> Self {
        Self::new("xdg-open")
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Build the process invocation without starting it.
    ///
    /// Stdin is detached so the child cannot compete with the prompt for
    /// terminal input; stdout and stderr are inherited.
    pub fn command(&self, targets: &[String]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args)
            .args(targets)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Start the opener and return its pid immediately.
    ///
    /// The only failure is the process not being created at all.
    pub fn spawn(&mut self, targets: &[String]) -> Result<u32, ShellError> {
        self.reap();
        tracing::debug!(program = ?self.program, ?targets, "spawning opener");
        let child = self
            .command(targets)
            .spawn()
            .map_err(|source| ShellError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;
        let pid = child.id();
        self.children.push(child);
        Ok(pid)
    }

    /// Collect children that have already exited. Never blocks.
    ///
    /// Returns how many spawned children are still running.
    pub fn reap(&mut self) -> usize {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                tracing::debug!(pid = child.id(), %status, "opener exited");
                false
            }
            Ok(None) => true,
            // Not ours to wait on any more.
            Err(_) => false,
        });
        self.children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_command_appends_targets_after_leading_args() {
        let opener = Opener::new("launcher").with_leading_args(["--new-window"]);
        let cmd = opener.command(&["somefile.txt".to_string(), "b c".to_string()]);

        assert_eq!(cmd.get_program(), OsStr::new("launcher"));
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(args, ["--new-window", "somefile.txt", "b c"]);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_platform_default_on_linux() {
        assert_eq!(Opener::platform_default().program(), OsStr::new("xdg-open"));
    }

    #[test]
    #[cfg(unix)]
    fn test_spawn_does_not_wait_for_child() {
        let mut opener = Opener::new("sleep");
        let started = Instant::now();
        opener.spawn(&["1".to_string()]).expect("spawn sleep");
        assert!(started.elapsed() < Duration::from_millis(900));
        assert_eq!(opener.reap(), 1);
    }

    /// State letter from `/proc/<pid>/stat`, or `None` once the pid is gone.
    #[cfg(target_os = "linux")]
    fn proc_state(pid: u32) -> Option<char> {
        let stat = std::fs::read_to_string(format!("/proc/{}/stat", pid)).ok()?;
        // The command name may contain spaces; the state follows the last ')'.
        let rest = &stat[stat.rfind(')')? + 1..];
        rest.trim_start().chars().next()
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_finished_children_are_not_left_as_zombies() {
        let mut opener = Opener::new("true");
        let mut pids = Vec::new();
        for _ in 0..5 {
            pids.push(opener.spawn(&["somefile.txt".to_string()]).expect("spawn true"));
            std::thread::sleep(Duration::from_millis(20));
        }

        let deadline = Instant::now() + Duration::from_secs(5);
        while opener.reap() > 0 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(20));
        }

        assert_eq!(opener.reap(), 0);
        for pid in pids {
            assert_ne!(proc_state(pid), Some('Z'), "pid {} left defunct", pid);
        }
    }

    #[test]
    fn test_spawn_missing_program_is_spawn_error() {
        let mut opener = Opener::new(format!("no-such-opener-{}", std::process::id()));
        match opener.spawn(&["somefile.txt".to_string()]) {
            Err(ShellError::Spawn { program, source }) => {
                assert!(program.starts_with("no-such-opener-"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Spawn error, got {:?}", other),
        }
        assert_eq!(opener.reap(), 0);
    }
}
