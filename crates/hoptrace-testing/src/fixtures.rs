//! Canned tool output and stand-in binaries.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Linux traceroute: router, a silent hop, then the destination.
pub const LINUX_TRACE: &str = "\
traceroute to example.com (93.184.216.34), 30 hops max
 1  router (192.168.1.1)  1.123 ms  1.234 ms  1.345 ms
 2  * * *
 3  example.com (93.184.216.34)  10.234 ms  10.345 ms  10.456 ms
";

/// Same route, answered by a different first-hop router.
pub const LINUX_TRACE_ALT: &str = "\
traceroute to example.com (93.184.216.34), 30 hops max
 1  backup-router (192.168.1.254)  2.001 ms  2.002 ms  2.003 ms
 2  * * *
 3  example.com (93.184.216.34)  11.0 ms  11.1 ms  11.2 ms
";

pub const WINDOWS_TRACE: &str = "\

Tracing route to example.com [93.184.216.34]
over a maximum of 30 hops:

  1    <1 ms    <1 ms    <1 ms  192.168.1.1
  2     *        *        *     Request timed out.
  3    11 ms    10 ms    12 ms  edge.example.net [203.0.113.7]
  4    24 ms    23 ms    25 ms  example.com [93.184.216.34]

Trace complete.
";

/// Every probe unanswered.
pub const SILENT_TRACE: &str = "\
traceroute to 10.255.255.1 (10.255.255.1), 30 hops max
 1  * * *
 2  * * *
";

pub const DIG_OUTPUT: &str = "\
; <<>> DiG 9.18.18 <<>> example.com
;; ANSWER SECTION:
example.com.\t\t86400\tIN\tA\t93.184.216.34
";

/// Write an executable script under `dir` that prints `stdout` and exits
/// with `exit_code`, ignoring its arguments.
#[cfg(unix)]
pub fn write_fake_tool(dir: &Path, name: &str, stdout: &str, exit_code: i32) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(dir)?;
    let payload = dir.join(format!("{}.out", name));
    fs::write(&payload, stdout)?;

    let script = dir.join(name);
    fs::write(
        &script,
        format!(
            "#!/bin/sh\ncat '{}'\nexit {}\n",
            payload.display(),
            exit_code
        ),
    )?;
    let mut perms = fs::metadata(&script)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script, perms)?;
    Ok(script)
}

/// Write an executable script that records its arguments, one per line,
/// to `<name>.args` next to it and prints `stdout`.
#[cfg(unix)]
pub fn write_recording_tool(dir: &Path, name: &str, stdout: &str) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(dir)?;
    let payload = dir.join(format!("{}.out", name));
    fs::write(&payload, stdout)?;
    let args_file = dir.join(format!("{}.args", name));

    let script = dir.join(name);
    fs::write(
        &script,
        format!(
            "#!/bin/sh\nfor a in \"$@\"; do printf '%s\\n' \"$a\" >> '{}'; done\ncat '{}'\n",
            args_file.display(),
            payload.display()
        ),
    )?;
    let mut perms = fs::metadata(&script)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script, perms)?;
    Ok(script)
}

/// Arguments captured by a tool from [`write_recording_tool`].
pub fn recorded_args(dir: &Path, name: &str) -> Result<Vec<String>> {
    let path = dir.join(format!("{}.args", name));
    if !path.exists() {
        return Ok(Vec::new());
    }
    Ok(fs::read_to_string(path)?
        .lines()
        .map(String::from)
        .collect())
}
