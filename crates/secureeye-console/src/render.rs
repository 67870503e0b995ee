//! Plain-text rendering of dashboard views

use secureeye_protocol::{AdminView, Notice, StoreEvent, UserView};
use std::fmt;

/// Text form of the admin dashboard
#[derive(Debug)]
pub struct AdminScreen<'a>(pub &'a AdminView);

impl fmt::Display for AdminScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "== Camera Management ==")?;
        if !view.search.is_empty() {
            writeln!(f, "Search: {}", view.search)?;
        }
        write_notice(f, view.notice.as_ref())?;

        writeln!(
            f,
            "{:<10} {:<24} {:<16} {:<22} {:<10} {}",
            "ID", "Name", "Location", "Added By", "Date", "Status"
        )?;
        if view.rows.is_empty() {
            writeln!(f, "(no matching cameras)")?;
        }
        for row in &view.rows {
            writeln!(
                f,
                "{:<10} {:<24} {:<16} {:<22} {:<10} [{}]",
                row.id.as_str(),
                row.name,
                row.location,
                row.added_by,
                row.date_added.to_string(),
                row.status
            )?;
        }

        if let Some(detail) = &view.detail {
            let record = &detail.record;
            writeln!(f, "-- Camera Details --")?;
            writeln!(f, "ID:         {}", record.id)?;
            writeln!(f, "Name:       {}", record.name)?;
            writeln!(f, "Location:   {}", record.location)?;
            writeln!(f, "Status:     {}", record.status)?;
            writeln!(f, "Added By:   {}", record.added_by)?;
            writeln!(f, "Date Added: {}", record.date_added)?;
            if detail.can_decide {
                writeln!(f, "Actions:    approve {0} | decline {0}", record.id)?;
            }
        }
        Ok(())
    }
}

/// Text form of the user dashboard
#[derive(Debug)]
pub struct UserScreen<'a>(pub &'a UserView);

impl fmt::Display for UserScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "== Your Cameras ==")?;
        write_notice(f, view.notice.as_ref())?;

        if view.is_empty() {
            writeln!(f, "No Cameras Found")?;
        }
        for card in &view.cards {
            writeln!(f, "#{} {}", card.id, card.name)?;
            writeln!(f, "   {}", card.subtitle)?;
            writeln!(f, "   Location: {}", card.location)?;
            writeln!(f, "   Model: {}  Range: {}", card.model, card.range)?;
            writeln!(
                f,
                "   Sharing: {}{}",
                if card.sharing { "on" } else { "off" },
                if card.verified { "  [verified]" } else { "" }
            )?;
        }

        if let Some(detail) = &view.detail {
            let draft = &detail.draft;
            let marker = if detail.dirty { " (unsaved)" } else { "" };
            writeln!(f, "-- Editing camera {}{marker} --", detail.target)?;
            writeln!(f, "name:     {}", draft.name)?;
            writeln!(f, "location: {}", draft.location)?;
            writeln!(f, "type:     {}", draft.camera_type)?;
            writeln!(f, "company:  {}", draft.company_name)?;
            writeln!(f, "model:    {}", draft.model)?;
            writeln!(f, "serial:   {}", draft.serial_no)?;
            writeln!(f, "range:    {}", draft.range)?;
            writeln!(f, "sharing:  {}", if draft.sharing { "on" } else { "off" })?;
        }
        Ok(())
    }
}

fn write_notice(f: &mut fmt::Formatter<'_>, notice: Option<&Notice>) -> fmt::Result {
    match notice {
        Some(notice) => writeln!(f, "{notice}"),
        None => Ok(()),
    }
}

/// One line describing a store change
#[must_use]
pub fn describe_event(event: &StoreEvent) -> String {
    match event {
        StoreEvent::Inserted { id } => format!("~ camera {id} added"),
        StoreEvent::Replaced { id, revision } => {
            format!("~ camera {id} updated (revision {revision})")
        }
        StoreEvent::StatusChanged { id, from, to } => {
            format!("~ camera {id} {from} -> {to}")
        }
        StoreEvent::Removed { id } => format!("~ camera {id} removed"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use secureeye_core::{admin_cameras, user_cameras};
    use secureeye_protocol::{
        AdminDashboard, AdminMessage, RecordStore, RecordingNavigator, UserDashboard,
        UserMessage,
    };
    use secureeye_types::{ApprovalStatus, CameraId};

    #[test]
    fn test_admin_screen_lists_rows_and_actions() {
        let mut admin = AdminDashboard::new(RecordStore::with_records(admin_cameras()).unwrap());
        admin.update(AdminMessage::OpenDetails("CAM0003".into()));

        let text = AdminScreen(&admin.view()).to_string();

        assert!(text.contains("CAM0004"));
        assert!(text.contains("[pending]"));
        assert!(text.contains("-- Camera Details --"));
        assert!(text.contains("approve CAM0003 | decline CAM0003"));
    }

    #[test]
    fn test_admin_screen_hides_actions_when_decided() {
        let mut admin = AdminDashboard::new(RecordStore::with_records(admin_cameras()).unwrap());
        admin.update(AdminMessage::OpenDetails("CAM0002".into()));

        let text = AdminScreen(&admin.view()).to_string();
        assert!(!text.contains("Actions:"));
    }

    #[test]
    fn test_user_screen_empty_state() {
        let user = UserDashboard::new(RecordStore::new(), RecordingNavigator::new());
        let text = UserScreen(&user.view()).to_string();
        assert!(text.contains("No Cameras Found"));
    }

    #[test]
    fn test_user_screen_shows_cards_and_draft() {
        let mut user = UserDashboard::new(
            RecordStore::with_records(user_cameras()).unwrap(),
            RecordingNavigator::new(),
        );
        user.update(UserMessage::OpenDetails(CameraId::from(2)));

        let text = UserScreen(&user.view()).to_string();

        assert!(text.contains("Private Camera - SafeView"));
        assert!(text.contains("[verified]"));
        assert!(text.contains("-- Editing camera 2 --"));
    }

    #[test]
    fn test_describe_event() {
        let event = StoreEvent::StatusChanged {
            id: "CAM0001".into(),
            from: ApprovalStatus::Pending,
            to: ApprovalStatus::Approved,
        };
        assert_eq!(describe_event(&event), "~ camera CAM0001 pending -> approved");
    }
}
