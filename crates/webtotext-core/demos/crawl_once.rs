//! Walkthrough of one crawl-and-export cycle
//!
//! Run with: cargo run --example crawl_once -p webtotext-core
//!
//! Points the session at the host from WEBTOTEXT_API_URL (or the
//! default API host) and crawls example.com.

use webtotext_core::{ClientConfig, CrawlSession};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env();
    println!("Crawl API: {}\n", config.api_base_url);

    let mut session = CrawlSession::with_config(config)?;
    session.set_url("example.com");
    session.set_page_count(5);

    if !session.can_crawl() {
        println!("Inputs did not pass validation!");
        return Ok(());
    }

    println!("Crawling {} (up to {} pages)...\n", session.url(), session.page_count());

    match session.crawl().await {
        Ok(()) => {
            println!("=== Editor contents ===\n{}\n", session.editor_text());

            let json_file = session.export_json()?;
            println!(
                "{} ({}): {} bytes",
                json_file.file_name,
                json_file.mime_type,
                json_file.contents.len()
            );

            let text_file = session.export_text()?;
            println!(
                "{} ({}): {} bytes",
                text_file.file_name,
                text_file.mime_type,
                text_file.contents.len()
            );
            println!("\n=== Flattened text ===\n{}", text_file.contents);
        }
        Err(e) => {
            println!("Crawl failed: {}", e);
            println!("The session stays usable; try again after the cooldown.");
        }
    }

    Ok(())
}
