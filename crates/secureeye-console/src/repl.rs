//! Line-oriented dashboard session
//!
//! Reads commands from any [`BufRead`], feeds them to a dashboard and writes
//! the re-derived view to any [`Write`].

use secureeye_protocol::{AdminDashboard, AdminMessage, UserDashboard, UserMessage};
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::command::{ADMIN_HELP, Command, CommandError, USER_HELP, parse_admin, parse_user};
use crate::navigator::ConsoleNavigator;
use crate::render::{AdminScreen, UserScreen, describe_event};

/// A dashboard that can be driven from the console
pub trait Session {
    /// Input message type of the dashboard
    type Message;

    /// Command list shown by `help`
    const HELP: &'static str;

    /// Parse one input line
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] if the line is not a valid command.
    fn parse(line: &str) -> Result<Command<Self::Message>, CommandError>;

    /// Apply a message and describe what changed, one line per change
    fn apply(&mut self, message: Self::Message) -> Vec<String>;

    /// Current view as text
    fn render(&self) -> String;
}

impl Session for AdminDashboard {
    type Message = AdminMessage;

    const HELP: &'static str = ADMIN_HELP;

    fn parse(line: &str) -> Result<Command<AdminMessage>, CommandError> {
        parse_admin(line)
    }

    fn apply(&mut self, message: AdminMessage) -> Vec<String> {
        self.update(message).iter().map(describe_event).collect()
    }

    fn render(&self) -> String {
        AdminScreen(&self.view()).to_string()
    }
}

impl Session for UserDashboard<ConsoleNavigator> {
    type Message = UserMessage;

    const HELP: &'static str = USER_HELP;

    fn parse(line: &str) -> Result<Command<UserMessage>, CommandError> {
        parse_user(line)
    }

    fn apply(&mut self, message: UserMessage) -> Vec<String> {
        let mut lines: Vec<String> = self.update(message).iter().map(describe_event).collect();
        lines.extend(
            self.navigator_mut()
                .take_unreported()
                .into_iter()
                .map(|route| format!("-> {route} (open this form in the web dashboard)")),
        );
        lines
    }

    fn render(&self) -> String {
        UserScreen(&self.view()).to_string()
    }
}

/// Run a session until `quit` or end of input
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn run<S, R, W>(session: &mut S, input: R, mut output: W) -> io::Result<()>
where
    S: Session,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", session.render())?;

    for line in input.lines() {
        let line = line?;
        match S::parse(&line) {
            Ok(Command::Dispatch(message)) => {
                let changes = session.apply(message);
                debug!(changes = changes.len(), "Command applied");
                for change in changes {
                    writeln!(output, "{change}")?;
                }
                write!(output, "{}", session.render())?;
            }
            Ok(Command::Show) => write!(output, "{}", session.render())?,
            Ok(Command::Help) => writeln!(output, "{}", S::HELP)?,
            Ok(Command::Quit) => break,
            Ok(Command::Nothing) => {}
            Err(err) => writeln!(output, "error: {err}")?,
        }
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secureeye_core::{admin_cameras, user_cameras};
    use secureeye_protocol::RecordStore;
    use secureeye_types::{ApprovalStatus, CameraId};
    use std::io::Cursor;

    fn run_to_string<S: Session>(session: &mut S, script: &str) -> String {
        let mut output = Vec::new();
        run(session, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_admin_session_approves() {
        let mut admin = AdminDashboard::new(RecordStore::with_records(admin_cameras()).unwrap());

        let output = run_to_string(&mut admin, "search cam0003\nopen CAM0003\napprove CAM0003\nquit\n");

        assert!(output.contains("~ camera CAM0003 pending -> approved"));
        assert!(output.contains("[info] Camera CAM0003 approved"));
        assert_eq!(
            admin.store().get(&"CAM0003".into()).unwrap().status,
            ApprovalStatus::Approved
        );
    }

    #[test]
    fn test_admin_session_reports_bad_commands() {
        let mut admin = AdminDashboard::new(RecordStore::with_records(admin_cameras()).unwrap());

        let output = run_to_string(&mut admin, "frobnicate\napprove\n");

        assert!(output.contains("error: Unknown command: frobnicate"));
        assert!(output.contains("error: Missing argument for 'approve'"));
    }

    #[test]
    fn test_user_session_edits_and_navigates() {
        let mut user = UserDashboard::new(
            RecordStore::with_records(user_cameras()).unwrap(),
            ConsoleNavigator::new(),
        );

        let output = run_to_string(
            &mut user,
            "open 2\nset sharing on\nsave\ndelete 3\nsubsidy\nhelp\n",
        );

        assert!(output.contains("~ camera 2 updated (revision 4)"));
        assert!(output.contains("~ camera 3 removed"));
        assert!(output.contains("-> /subsidy-form"));
        assert!(output.contains("set <field> <value>"));
        assert!(user.store().get(&CameraId::from(2)).unwrap().sharing);
        assert_eq!(user.store().len(), 2);
    }

    #[test]
    fn test_stops_at_quit() {
        let mut user = UserDashboard::new(
            RecordStore::with_records(user_cameras()).unwrap(),
            ConsoleNavigator::new(),
        );

        run_to_string(&mut user, "quit\ndelete 1\n");

        assert_eq!(user.store().len(), 3);
    }
}
