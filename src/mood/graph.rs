use serde::Serialize;

use super::aggregator::WeightedGenreGroup;
use super::analyzer::MoodAnalyzer;
use super::profiles::BaseGenre;
use crate::cocktails::catalog::MOOD_POOLS;

/// Minimum genre mood score for a genre to be linked to a cocktail
const LINK_THRESHOLD: f64 = 20.0;
/// Cocktails shown per mood
const COCKTAILS_PER_MOOD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Genre,
    Cocktail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub value: f64, // mood score scaled to 0.0..1.0
}

/// Which base genres lead to which cocktails, for visualization
#[derive(Debug, Clone, Serialize)]
pub struct GenreCocktailGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl GenreCocktailGraph {
    pub fn build() -> Self {
        let mut nodes: Vec<GraphNode> = BaseGenre::ALL
            .into_iter()
            .map(|genre| GraphNode {
                id: format!("genre_{}", genre.name()),
                name: genre.display_name().to_string(),
                kind: NodeKind::Genre,
            })
            .collect();
        let mut links = Vec::new();

        let analyzer = MoodAnalyzer::default();
        let genre_scores: Vec<_> = BaseGenre::ALL
            .into_iter()
            .map(|genre| {
                let group = WeightedGenreGroup::new([genre.name()], 1.0);
                (genre, analyzer.compute_mood_scores(&[group]))
            })
            .collect();

        for pool in &MOOD_POOLS {
            for cocktail in pool.cocktails.iter().take(COCKTAILS_PER_MOOD) {
                let cocktail_id = format!("cocktail_{cocktail}");
                nodes.push(GraphNode {
                    id: cocktail_id.clone(),
                    name: cocktail.to_string(),
                    kind: NodeKind::Cocktail,
                });

                for (genre, scores) in &genre_scores {
                    let score = scores.get(pool.mood);
                    if score > LINK_THRESHOLD {
                        links.push(GraphLink {
                            source: format!("genre_{}", genre.name()),
                            target: cocktail_id.clone(),
                            value: score / 100.0,
                        });
                    }
                }
            }
        }

        GenreCocktailGraph { nodes, links }
    }
}
