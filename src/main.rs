use std::env;
use std::fs;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use stylegen::models::strip_data_uri;
use stylegen::{
    EditOutcome, GeminiConfig, Item, RunOutcome, RunPhase, StylistError, StylistSession,
};

fn media_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next().map(|ext| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "webp" => "image/webp",
        _ => "image/png",
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    stylegen::logger::init_with_config(
        stylegen::logger::LoggerConfig::development()
            .with_level(stylegen::logger::LogLevel::Debug),
    )?;

    let mut args = env::args().skip(1);
    let image_path = match args.next() {
        Some(path) => path,
        None => {
            log::error!("Usage: stylegen <item-photo> [edit instruction]");
            std::process::exit(2);
        }
    };
    let edit_instruction = args.next();

    let config = GeminiConfig::from_env();
    if config.api_key.is_none() {
        log::error!("❌ GEMINI_API_KEY is not set");
        std::process::exit(2);
    }

    log::info!("🔄 Creating stylist session...");
    let session = StylistSession::with_client(config)?;

    let bytes = fs::read(&image_path)
        .map_err(|e| StylistError::DecodeError(format!("cannot read {}: {}", image_path, e)))?;
    let item = Item::from_bytes(&bytes, media_type_for(&image_path));
    log::info!(
        "📸 Uploaded {} ({} bytes, {})",
        image_path,
        bytes.len(),
        item.media_type
    );

    // Progress messages are observable from another task while the run is
    // in flight; mirror that here so the console shows each phase.
    let progress_task = {
        let session = session.clone();
        tokio::spawn(async move {
            let mut last = None;
            loop {
                if matches!(session.phase(), RunPhase::Ready | RunPhase::Failed) {
                    break;
                }
                let message = session.progress_message();
                if message != last {
                    if let Some(m) = &message {
                        log::info!("⏳ {}", m);
                    }
                    last = message;
                }
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
        })
    };

    let outfits = match session.process_item(item).await {
        Ok(RunOutcome::Completed(outfits)) => outfits,
        Ok(RunOutcome::Superseded) => {
            log::warn!("Run was superseded before completing");
            return Ok(());
        }
        Err(e) => {
            log::error!("❌ Failed to style your item: {}", e);
            log::error!("💡 Please try again with a different photo");
            std::process::exit(1);
        }
    };
    let _ = progress_task.await;

    log::info!("🎉 Styled {} outfits", outfits.len());
    for (index, outfit) in outfits.iter().enumerate() {
        log::info!("👗 {} — {}", outfit.category, outfit.suggestion.description);
        for piece in &outfit.suggestion.items {
            log::info!("   • {}", piece);
        }
        log::info!("   Tip: {}", outfit.suggestion.styling_tips);

        let filename = format!(
            "outfit_{}_{}.png",
            outfit.category.as_str().to_lowercase().replace(' ', "_"),
            chrono::Utc::now().timestamp()
        );
        match STANDARD.decode(strip_data_uri(&outfit.image_uri)) {
            Ok(image_bytes) => match fs::write(&filename, image_bytes) {
                Ok(_) => log::info!("💾 Saved card {} to {}", index, filename),
                Err(e) => log::error!("❌ Failed to save image: {}", e),
            },
            Err(e) => log::error!("❌ Failed to decode image data: {}", e),
        }
    }

    if let Some(instruction) = edit_instruction {
        log::info!("✏️  Applying edit to the first card: {}", instruction);
        match session.edit_outfit(0, &instruction).await {
            Ok(EditOutcome::Applied(new_image)) => {
                let filename = format!("outfit_edited_{}.png", chrono::Utc::now().timestamp());
                let image_bytes = STANDARD.decode(strip_data_uri(&new_image))?;
                fs::write(&filename, image_bytes)?;
                log::info!("💾 Edited image saved to {}", filename);
            }
            Ok(EditOutcome::Superseded) => {
                log::warn!("Edit result discarded: a newer run replaced the cards");
            }
            Err(e) => {
                log::error!("❌ Something went wrong while editing: {}", e);
                log::error!("💡 The card keeps its previous image; please try again");
            }
        }
    }

    Ok(())
}
