use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use formatx::formatx;
use std::io::Write;
use teamcity_builds::constant::log::*;
use teamcity_builds::teamcity::teamcity_model::build::Build;
use teamcity_builds::teamcity::teamcity_model::build_status::BuildStatus;
use teamcity_builds::teamcity::teamcity_model::tc_date::is_zero_time;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThemeColor {
    Main,
    Second,
    Success,
    Warn,
    Error,
}

impl From<ThemeColor> for Color {
    fn from(value: ThemeColor) -> Self {
        match value {
            ThemeColor::Main => Color::White,
            ThemeColor::Second => Color::Grey,
            ThemeColor::Success => Color::Green,
            ThemeColor::Warn => Color::Yellow,
            ThemeColor::Error => Color::Red,
        }
    }
}

impl From<BuildStatus> for ThemeColor {
    fn from(value: BuildStatus) -> Self {
        match value {
            BuildStatus::Running => ThemeColor::Warn,
            BuildStatus::Success => ThemeColor::Success,
            BuildStatus::Failure => ThemeColor::Error,
        }
    }
}

pub fn colored_println<W: Write>(out: &mut W, color: ThemeColor, msg: &str) {
    let _ = execute!(
        out,
        SetForegroundColor(color.into()),
        Print(msg),
        ResetColor,
        Print("\n"),
    );
}

pub fn format_build_line(build: &Build) -> String {
    formatx!(
        HINT_BUILD_LINE,
        &build.number,
        &build.build_type_id,
        &build.branch_name,
        build.status,
        build.progress,
        &build.status_text
    )
    .unwrap_or_default()
}

pub fn format_build_times(build: &Build) -> String {
    let show = |date: &chrono::DateTime<chrono::Utc>| {
        if is_zero_time(date) {
            HINT_NOT_SET.to_string()
        } else {
            date.format("%Y-%m-%d %H:%M:%S UTC").to_string()
        }
    };

    let finished = if build.is_finished() {
        show(&build.finish_date)
    } else {
        HINT_NOT_SET.to_string()
    };

    formatx!(HINT_BUILD_TIMES, show(&build.start_date), finished).unwrap_or_default()
}

pub fn print_builds<W: Write>(out: &mut W, builds: &[Build]) {
    if builds.is_empty() {
        colored_println(out, ThemeColor::Second, HINT_NO_BUILDS);
        return;
    }

    for build in builds {
        colored_println(out, build.status.into(), &format_build_line(build));
        colored_println(out, ThemeColor::Second, &format_build_times(build));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use teamcity_builds::teamcity::teamcity_model::tc_date::zero_time;

    fn build() -> Build {
        Build {
            id: 42,
            number: "17".to_string(),
            status: BuildStatus::Running,
            status_text: "Step 2/3".to_string(),
            progress: 66,
            build_type_id: "Proj_Build".to_string(),
            branch_name: "main".to_string(),
            start_date: Utc.with_ymd_and_hms(2023, 1, 1, 8, 0, 0).unwrap(),
            finish_date: zero_time(),
        }
    }

    #[test]
    fn test_format_build_line() {
        assert_eq!(
            format_build_line(&build()),
            "#17 [Proj_Build] main Running 66% Step 2/3"
        );
    }

    #[test]
    fn test_format_build_times() {
        assert_eq!(
            format_build_times(&build()),
            format!("    started 2023-01-01 08:00:00 UTC, finished {}", HINT_NOT_SET)
        );
    }

    #[test]
    fn test_format_build_times_finished() {
        let mut finished = build();
        finished.status = BuildStatus::Success;
        finished.finish_date = Utc.with_ymd_and_hms(2023, 1, 1, 8, 30, 0).unwrap();

        assert_eq!(
            format_build_times(&finished),
            "    started 2023-01-01 08:00:00 UTC, finished 2023-01-01 08:30:00 UTC"
        );

        let mut still_running = finished.clone();
        still_running.status = BuildStatus::Running;
        assert_eq!(
            format_build_times(&still_running),
            format!("    started 2023-01-01 08:00:00 UTC, finished {}", HINT_NOT_SET)
        );
    }

    #[test]
    fn test_format_build_line_keeps_build() {
        let build = build();
        let line = format_build_line(&build);

        assert!(line.starts_with("#17 [Proj_Build]"));
        assert_eq!(build.number, "17");
        assert_eq!(build.status_text, "Step 2/3");
    }

    #[test]
    fn test_print_builds_to_buffer() {
        let mut out: Vec<u8> = Vec::new();
        print_builds(&mut out, &[build()]);

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("#17 [Proj_Build] main Running 66% Step 2/3"));
        assert!(text.contains("started 2023-01-01 08:00:00 UTC"));
    }

    #[test]
    fn test_print_no_builds() {
        let mut out: Vec<u8> = Vec::new();
        print_builds(&mut out, &[]);

        assert!(String::from_utf8_lossy(&out).contains(HINT_NO_BUILDS));
    }
}
