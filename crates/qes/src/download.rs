use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use tracing::{info, warn};

/// Public listing of the Quasielastic Electron Nucleus Scattering Archive.
pub const ARCHIVE_BASE_URL: &str =
    "http://discovery.phys.virginia.edu/research/groups/qes-archive/data/";

/// Archive folders published as single files under the data listing.
const ARCHIVE_FOLDERS: [&str; 22] = [
    "E12-14-012_totUncertainties",
    "E12-14-012_statUncertainties",
    "E08-014",
    "E02-019",
    "Miho_12C",
    "2H",
    "3H",
    "3He",
    "4He",
    "6Li",
    "12C",
    "16O",
    "27Al",
    "40Ca",
    "48Ca",
    "56Fe",
    "197Au",
    "208Pb",
    "238U",
    "Other",
    "nms",
    "nmt",
];

/// Fetches every known archive folder into `out_dir`. Individual failures
/// (timeouts, non-200 responses) are logged and skipped so they can never
/// block a later combine run over whatever is already on disk.
pub fn download_archive(base_url: &str, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .context("failed to build HTTP client")?;

    for folder in ARCHIVE_FOLDERS {
        // E08-014 is published as a zip of per-target files; everything else
        // is a flat .dat file.
        let extension = if folder == "E08-014" { ".zip" } else { ".dat" };
        let file_name = format!("{folder}{extension}");
        let url = format!("{base_url}{file_name}");

        match fetch(&client, &url) {
            Ok(bytes) => {
                let path = out_dir.join(&file_name);
                fs::write(&path, bytes)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(file = %file_name, "downloaded");
            }
            Err(err) => warn!(url = %url, %err, "download failed; continuing"),
        }

        thread::sleep(Duration::from_secs(2));
    }

    Ok(())
}

fn fetch(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        bail!("unexpected status {}", response.status());
    }
    Ok(response.bytes()?.to_vec())
}
