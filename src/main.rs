use clap::Parser;
use florascan::{cli, client, config, error, image_file, logger, render};
use cli::{Cli, Commands};
use client::HttpClient;
use config::Config;
use error::{FloraScanError, Result};
use florascan_common::{detail_message, GalleryState, IdentifyRequest, PlantApi, ResultView};
use image_file::ImageFile;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // 詳細はログ、利用者には丸めた文言
            tracing::error!("{}", e);
            eprintln!("✖ {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.base_url.as_deref());

    match cli.command {
        Commands::Identify { image, description, json } => {
            let description = description.unwrap_or_default();
            let image = image.as_deref().map(ImageFile::read).transpose()?;
            // 画像も説明もなければここで終わり（何も送らない）
            let request = IdentifyRequest::from_input(&description, image)?;

            let client = HttpClient::new(&base_url, config.timeout())?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(florascan_common::messages::ANALYZING_LABEL);
            spinner.enable_steady_tick(Duration::from_millis(100));

            let response = client.identify(request).await;
            spinner.finish_and_clear();
            let response = response.map_err(FloraScanError::Identify)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print!("{}", render::render_result(&ResultView::from_response(&response)));
            }
        }

        Commands::Plants { limit } => {
            let client = HttpClient::new(&base_url, config.timeout())?;
            let limit = limit.unwrap_or(config.gallery_limit);
            let result = client.list_plants(limit).await;
            if let Err(e) = &result {
                tracing::error!("Error loading plants: {}", e);
            }
            print!("{}", render::render_gallery(&GalleryState::from_result(&result, limit as usize)));
        }

        Commands::Plant { id } => {
            let client = HttpClient::new(&base_url, config.timeout())?;
            let plant = client.plant(id).await?;
            println!("{}", detail_message(&plant));
        }

        Commands::Stats => {
            let client = HttpClient::new(&base_url, config.timeout())?;
            let stats = client.stats().await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }

        Commands::Config { set_base_url, set_timeout, show } => {
            let mut config = config;
            let changed = set_base_url.is_some() || set_timeout.is_some();

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  ベースURL: {}", config.base_url);
                println!("  使用中のベースURL: {}", base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  一覧件数: {}", config.gallery_limit);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
