use std::fmt::Write as _;
use tabsplit_i18n as i18n;
use tabsplit_infrastructure::BackupPreview;

pub struct BackupPresenter;

impl BackupPresenter {
    /// Shown before an import replaces the current group.
    pub fn render_preview(preview: &BackupPreview<'_>) -> String {
        let mut reply = String::with_capacity(256);
        let exported_at = preview
            .exported_at
            .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| i18n::UNKNOWN_DATE.to_owned());

        let _ = writeln!(&mut reply, "• {}: {}", i18n::GROUP, preview.group_name);
        let _ = writeln!(
            &mut reply,
            "• {}: {}",
            i18n::PARTICIPANTS,
            preview.participant_count
        );
        let _ = writeln!(&mut reply, "• {}: {}", i18n::EXPENSES, preview.expense_count);
        let _ = writeln!(&mut reply, "• {}: {exported_at}", i18n::EXPORTED_AT);
        let _ = writeln!(&mut reply, "{}", i18n::REPLACES_CURRENT_GROUP);
        reply
    }
}
