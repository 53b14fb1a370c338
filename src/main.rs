use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, warn};
use tracing_subscriber::EnvFilter;

mod cocktaildb;
mod cocktails;
mod config;
mod error;
mod models;
mod mood;
mod pipeline;
mod spotify;

#[cfg(test)]
mod pipeline_tests;

use crate::cocktaildb::CocktailDbClient;
use crate::config::load_config;
use crate::models::CocktailRecord;
use crate::mood::graph::GenreCocktailGraph;
use crate::mood::{
    CharacteristicVector, Mood, MoodAnalyzer, MoodScores, RecommendationSettings,
    WeightedGenreGroup,
};
use crate::spotify::{ArtistSource, SpotifyClient};

const DIMENSION_LABELS: [&str; 5] = [
    "Intensity",
    "Danceability",
    "Emotionality",
    "Aggressiveness",
    "Sophistication",
];

#[derive(Parser)]
#[command(name = "playlist-mixologist")]
#[command(about = "Cocktail recommendations from the mood of a Spotify playlist")]
#[command(version)]
struct Args {
    /// Spotify playlist URL, URI or ID
    #[arg(required_unless_present_any = ["graph", "genres"])]
    playlist_url: Option<String>,

    /// Analyze genre groups instead of a playlist, e.g. "pop dance,pop:2" "rock:1"
    #[arg(short = 'g', long = "genres", num_args = 1.., conflicts_with = "playlist_url")]
    genres: Vec<WeightedGenreGroup>,

    /// Number of cocktails to aim for (overrides the settings file)
    #[arg(short = 'n', long = "count")]
    count: Option<usize>,

    /// Seed for reproducible cocktail picks
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Path to a JSON file with recommendation settings
    #[arg(long = "settings")]
    settings_file: Option<String>,

    /// Print the result as JSON
    #[arg(long = "json")]
    json: bool,

    /// Print the genre to cocktail graph as JSON and exit
    #[arg(long = "graph")]
    graph: bool,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Quiet mode - only warnings and errors are logged
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn init_tracing(args: &Args) {
    let level = if args.debug {
        Level::DEBUG
    } else if args.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    if args.graph {
        println!("{}", serde_json::to_string_pretty(&GenreCocktailGraph::build())?);
        return Ok(());
    }

    let mut settings = match &args.settings_file {
        Some(path) => RecommendationSettings::load_from_file(path).map_err(|e| {
            anyhow::anyhow!("Failed to load recommendation settings from '{}': {}", path, e)
        })?,
        None => RecommendationSettings::default(),
    };
    if let Some(count) = args.count {
        settings.desired_count = count;
    }

    if !args.genres.is_empty() {
        print_genre_analysis(&args.genres, &settings, args.json)?;
        return Ok(());
    }

    let Some(playlist_url) = args.playlist_url.as_deref() else {
        return Err(anyhow::anyhow!("A playlist URL is required"));
    };

    let config = load_config()?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let spotify = match SpotifyClient::connect(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("✗ {}", e.user_message());
            return Err(e.into());
        }
    };
    let cocktail_db = CocktailDbClient::new(&config);

    let playlist = match spotify.playlist_info(playlist_url) {
        Ok(info) => Some(info),
        Err(e) => {
            warn!("could not fetch playlist details: {e}");
            None
        }
    };

    let recommendation =
        match pipeline::recommend(&spotify, &cocktail_db, &mut rng, playlist_url, &settings) {
            Ok(recommendation) => recommendation,
            Err(e) => {
                eprintln!("✗ {}", e.user_message());
                return Err(e.into());
            }
        };

    if args.json {
        let document = serde_json::json!({
            "playlist": playlist,
            "recommendation": recommendation,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    if let Some(info) = &playlist {
        println!("\n{}", info.name);
        println!("{}", "=".repeat(info.name.chars().count()));
        if !info.owner.is_empty() {
            println!("By {}", info.owner);
        }
        if !info.description.is_empty() {
            println!("{}", info.description);
        }
    }

    println!("\n=== TOP ARTISTS ===");
    if recommendation.artists.is_empty() {
        println!("No artists found in this playlist.");
    }
    for (i, artist) in recommendation.artists.iter().enumerate() {
        let genres_display = if artist.genres.is_empty() {
            "None".to_string()
        } else {
            artist.genres.join(", ")
        };
        println!(
            "{}. {} ({} tracks) | Genres: {}",
            i + 1,
            artist.name,
            artist.play_count,
            genres_display
        );
    }

    print_characteristics(&recommendation.analysis.characteristics);
    print_moods(&recommendation.analysis.scores, &recommendation.analysis.dominant);
    print_cocktails(&recommendation.cocktails);

    Ok(())
}

fn print_genre_analysis(
    groups: &[WeightedGenreGroup],
    settings: &RecommendationSettings,
    json: bool,
) -> Result<()> {
    let analysis = MoodAnalyzer::new(settings.dominant_threshold).analyze_groups(groups);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_characteristics(&analysis.characteristics);
        print_moods(&analysis.scores, &analysis.dominant);
    }
    Ok(())
}

fn print_characteristics(characteristics: &CharacteristicVector) {
    println!("\n=== MUSICAL CHARACTERISTICS ===");
    for (label, value) in DIMENSION_LABELS.iter().zip(characteristics.0) {
        println!("   {label:<15} {:>5.1}%", value * 100.0);
    }
}

fn print_moods(scores: &MoodScores, dominant: &[Mood]) {
    println!("\n=== MOOD SCORES ===");
    if scores.is_zero() {
        println!("No mood could be detected.");
    }
    for (mood, score) in scores.iter() {
        let marker = if dominant.contains(&mood) { "★" } else { " " };
        println!("{marker} {:<15} {score:>5.1}%", mood.as_str());
    }
    let dominant: Vec<&str> = dominant.iter().map(|mood| mood.as_str()).collect();
    println!("Dominant moods: {}", dominant.join(", "));
}

fn print_cocktails(cocktails: &[CocktailRecord]) {
    println!("\n=== COCKTAILS ===");
    if cocktails.is_empty() {
        println!("No cocktail could be recommended right now.");
        return;
    }
    for cocktail in cocktails {
        let mood_display = cocktail
            .mood
            .map(|mood| format!(" [{mood}]"))
            .unwrap_or_default();
        println!("\n🍸 {}{}", cocktail.name, mood_display);
        if !cocktail.mood_tags.is_empty() {
            println!("   Notes: {}", cocktail.mood_tags.join(", "));
        }
        if let Some(glass) = &cocktail.glass {
            println!("   Glass: {glass}");
        }
        for ingredient in &cocktail.ingredients {
            match &ingredient.measure {
                Some(measure) => println!("   - {} {}", measure, ingredient.name),
                None => println!("   - {}", ingredient.name),
            }
        }
        if let Some(instructions) = &cocktail.instructions {
            println!("   {instructions}");
        }
    }
}
