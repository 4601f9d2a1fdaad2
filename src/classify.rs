//! Log classification: count security-relevant lines in raw log text.
//!
//! Matching is plain substring search on the trimmed, lower-cased line.
//! Each counter moves by at most one per line, and the counters are
//! independent of each other.

use crate::model::{LogAnalysis, LogLine, UNKNOWN};

/// Width of the leading timestamp slice (`"Jan  1 00:00:00"`).
const TIMESTAMP_WIDTH: usize = 15;

/// Where the message starts: the timestamp plus one separator.
const MESSAGE_OFFSET: usize = TIMESTAMP_WIDTH + 1;

const LOGIN_MARKERS: &[&str] = &["login", "sshd"];

const FAILED_AUTH_MARKERS: &[&str] = &["failed password", "authentication failure"];

// "reboot" alone already covers the rest; the longer phrases document what
// is actually seen in the wild.
const REBOOT_MARKERS: &[&str] = &[
    "reboot",
    "system is rebooting",
    "shutting down for reboot",
    "systemd-logind: system is rebooting",
    "systemd[1]: started reboot",
];

/// Classify every non-blank line of `text`.
///
/// Never fails: empty or unrecognizable input gives zero counters.
pub fn analyze(text: &str) -> LogAnalysis {
    let mut analysis = LogAnalysis::default();

    // `lines()` also drops the `\r` of a CRLF ending, the same normalization
    // a text-mode read applies, so it never shifts the positional slices.
    for line in text.lines() {
        let lowered = line.trim().to_lowercase();
        if lowered.is_empty() {
            continue;
        }

        if contains_any(&lowered, LOGIN_MARKERS) {
            analysis.login_attempts += 1;
        }
        if contains_any(&lowered, FAILED_AUTH_MARKERS) {
            analysis.failed_auth_attempts += 1;
        }
        if contains_any(&lowered, REBOOT_MARKERS) {
            analysis.system_reboots += 1;
        }

        analysis.log_entries.push(split_line(line));
    }

    analysis
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Slice a raw line into timestamp and message by character position.
fn split_line(line: &str) -> LogLine {
    let width = line.chars().count();

    let timestamp = if width >= TIMESTAMP_WIDTH {
        line.chars().take(TIMESTAMP_WIDTH).collect()
    } else {
        UNKNOWN.to_string()
    };

    let message = if width >= MESSAGE_OFFSET {
        line.chars().skip(MESSAGE_OFFSET).collect()
    } else {
        line.to_string()
    };

    LogLine {
        timestamp,
        syslog_id: UNKNOWN.to_string(),
        priority: UNKNOWN.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(analysis: &LogAnalysis) -> (u64, u64, u64) {
        (
            analysis.login_attempts,
            analysis.failed_auth_attempts,
            analysis.system_reboots,
        )
    }

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(analyze(""), LogAnalysis::default());
        assert_eq!(analyze("\n\n   \n\t\n"), LogAnalysis::default());
    }

    #[test]
    fn failed_ssh_password_line() {
        let line = "Jan 1 00:00:00 host sshd[123]: Failed password for invalid user root";
        let analysis = analyze(line);

        assert_eq!(counters(&analysis), (1, 1, 0));
        assert_eq!(analysis.log_entries.len(), 1);

        let entry = &analysis.log_entries[0];
        assert_eq!(entry.timestamp, "Jan 1 00:00:00 ");
        assert_eq!(entry.message, "ost sshd[123]: Failed password for invalid user root");
        assert_eq!(entry.syslog_id, UNKNOWN);
        assert_eq!(entry.priority, UNKNOWN);
    }

    #[test]
    fn syslog_style_line_splits_cleanly() {
        let analysis = analyze("Mar 14 09:26:53 box kernel: eth0 link up");

        let entry = &analysis.log_entries[0];
        assert_eq!(entry.timestamp, "Mar 14 09:26:53");
        assert_eq!(entry.message, "box kernel: eth0 link up");
        assert_eq!(counters(&analysis), (0, 0, 0));
    }

    #[test]
    fn short_lines_use_fallbacks() {
        let analysis = analyze("login ok\n123456789012345\n");

        assert_eq!(analysis.log_entries[0].timestamp, UNKNOWN);
        assert_eq!(analysis.log_entries[0].message, "login ok");

        // Exactly 15 characters: timestamp taken, message is the whole line.
        assert_eq!(analysis.log_entries[1].timestamp, "123456789012345");
        assert_eq!(analysis.log_entries[1].message, "123456789012345");
    }

    #[test]
    fn sixteen_characters_gives_empty_message() {
        let analysis = analyze("123456789012345X");
        assert_eq!(analysis.log_entries[0].timestamp, "123456789012345");
        assert_eq!(analysis.log_entries[0].message, "");
    }

    #[test]
    fn slices_count_characters_not_bytes() {
        let analysis = analyze("ÄÖÜäöüßÄÖÜäöüßé rest");
        assert_eq!(analysis.log_entries[0].timestamp, "ÄÖÜäöüßÄÖÜäöüßé");
        assert_eq!(analysis.log_entries[0].message, "rest");
    }

    #[test]
    fn slices_use_untrimmed_line() {
        let analysis = analyze("   Jan  1 00:00:00 host x");
        assert_eq!(analysis.log_entries[0].timestamp, "   Jan  1 00:00");
    }

    #[test]
    fn record_count_matches_non_blank_lines() {
        let text = "a\n\nb\n   \nc\r\n\t\nd";
        let analysis = analyze(text);

        let messages: Vec<&str> = analysis
            .log_entries
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(messages, ["a", "b", "c", "d"]);
    }

    #[test]
    fn crlf_endings_do_not_reach_slices() {
        let analysis = analyze("123456789012345\r\nMar 14 09:26:53 box kernel: up\r\n");

        assert_eq!(analysis.log_entries[0].timestamp, "123456789012345");
        assert_eq!(analysis.log_entries[0].message, "123456789012345");
        assert_eq!(analysis.log_entries[1].message, "box kernel: up");
    }

    #[test]
    fn matching_ignores_case() {
        let upper = analyze("SSHD login attempt");
        let lower = analyze("sshd login attempt");

        assert_eq!(counters(&upper), counters(&lower));
        assert_eq!(counters(&upper), (1, 0, 0));
    }

    #[test]
    fn each_counter_moves_once_per_line() {
        let analysis = analyze("sshd: login failed password; authentication failure");
        assert_eq!(counters(&analysis), (1, 1, 0));
    }

    #[test]
    fn overlapping_reboot_phrases_count_once() {
        let analysis =
            analyze("Jan  1 00:00:00 host systemd[1]: Started reboot.target - System Reboot");
        assert_eq!(analysis.system_reboots, 1);

        let analysis = analyze("systemd-logind: System is rebooting. Shutting down for reboot");
        assert_eq!(analysis.system_reboots, 1);
    }

    #[test]
    fn auth_failure_without_login_marker() {
        let analysis = analyze("Jan  1 00:00:00 host su: pam_unix(su:auth): authentication failure");
        assert_eq!(counters(&analysis), (0, 1, 0));
    }

    #[test]
    fn counters_are_additive_over_concatenation() {
        let first = "Jan  1 00:00:00 host sshd[1]: Accepted publickey\n\
                     Jan  1 00:00:01 host sshd[1]: Failed password for root\n";
        let second = "\nJan  1 00:00:02 host systemd-logind[1]: System is rebooting.\n\
                      Jan  1 00:00:03 host login[2]: authentication failure\n\
                      Jan  1 00:00:04 host kernel: nothing to see\n";

        let a = analyze(first);
        let b = analyze(second);
        let both = analyze(&format!("{first}{second}"));

        assert_eq!(both.login_attempts, a.login_attempts + b.login_attempts);
        assert_eq!(
            both.failed_auth_attempts,
            a.failed_auth_attempts + b.failed_auth_attempts
        );
        assert_eq!(both.system_reboots, a.system_reboots + b.system_reboots);
        assert_eq!(
            both.log_entries.len(),
            a.log_entries.len() + b.log_entries.len()
        );
        // "systemd-logind" contains "login".
        assert_eq!(counters(&both), (4, 2, 1));
    }

    #[test]
    fn entries_keep_input_order() {
        let analysis = analyze(
            "Jan  1 00:00:03 host c: third\nJan  1 00:00:01 host a: first\nJan  1 00:00:02 host b: second",
        );
        let messages: Vec<&str> = analysis
            .log_entries
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(messages, ["host c: third", "host a: first", "host b: second"]);
    }
}
