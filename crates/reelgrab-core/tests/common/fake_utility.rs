//! Stand-in download utilities written as POSIX shell scripts.
//!
//! Scripts are run as `sh <script> <args...>` instead of being executed
//! directly, so no exec bit is needed and no freshly written file is ever
//! exec'd while another test thread may still hold it open.

use reelgrab_core::dispatch::UtilityCommand;
use std::path::Path;

/// Creates `<number>.mp4` from the `-o` template unless the URL contains
/// "bad", in which case it prints an error to stderr and exits 1.
pub const FAIL_ON_BAD: &str = r#"
out="$2"
for last; do :; done
case "$last" in
  *bad*) echo "ERROR: [Instagram] $last: Unable to extract video url" >&2; exit 1 ;;
esac
: > "${out%.*}.mp4"
"#;

/// Never finishes within a test timeout.
pub const HANG: &str = "exec sleep 30\n";

/// Fails with 300 characters of stderr.
pub const NOISY_FAILURE: &str = "printf '%0300d' 0 >&2\nexit 2\n";

/// Fails without writing anything to stderr.
pub const SILENT_FAILURE: &str = "exit 3\n";

/// Writes every argument on its own line to `args.txt` next to the script.
pub const RECORD_ARGS: &str = r#"
dir=$(dirname "$0")
for a; do printf '%s\n' "$a"; done > "$dir/args.txt"
"#;

/// Writes `body` to `<dir>/fake-yt-dlp.sh` and returns a command running it via `sh`.
pub fn install(dir: &Path, body: &str) -> UtilityCommand {
    let script = dir.join("fake-yt-dlp.sh");
    std::fs::write(&script, body).expect("write fake utility");
    UtilityCommand::new("sh", [script.into_os_string()])
}
