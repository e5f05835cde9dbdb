//! Structured response schemas declared to the generator.
//!
//! These mirror the wire shapes in `state` and `generator`. Enumerated
//! concepts carry explicit `enum` lists so the service cannot invent
//! labels the client does not know.

use crate::state::{CorporateHealth, InvestmentKind};
use serde_json::{json, Value};

/// Schema for the setup response: intro, mood, 3 archetypes, 1 rival.
pub fn setup_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "intro": { "type": "STRING" },
            "marketMood": { "type": "STRING" },
            "archetypes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "startingCapital": { "type": "NUMBER" },
                        "uniqueAsset": { "type": "STRING" },
                        "criticalFlaw": { "type": "STRING" }
                    },
                    "required": ["id", "name", "description", "startingCapital", "uniqueAsset", "criticalFlaw"]
                }
            },
            "rival": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING" },
                    "companyName": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "archetype": { "type": "STRING" }
                },
                "required": ["name", "companyName", "description", "archetype"]
            }
        },
        "required": ["intro", "marketMood", "archetypes", "rival"]
    })
}

/// Schema for a turn response: narrative, indicators, both ledgers,
/// the next dilemma with options, and the terminal flags.
pub fn turn_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "narrative": { "type": "STRING" },
            "marketContext": { "type": "STRING" },
            "headlines": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3 a 5 manchetes curtas de notícias fictícias que afetam o mundo do jogo."
            },
            "inflationRate": { "type": "NUMBER" },
            "interestRate": { "type": "NUMBER" },
            "corporateUpdates": {
                "type": "OBJECT",
                "properties": {
                    "cash": { "type": "NUMBER" },
                    "revenue": { "type": "NUMBER" },
                    "expenses": { "type": "NUMBER" },
                    "debtService": { "type": "NUMBER" },
                    "valuation": { "type": "NUMBER" },
                    "health": { "type": "STRING", "enum": CorporateHealth::labels() }
                },
                "required": ["cash", "revenue", "expenses", "debtService", "valuation", "health"]
            },
            "personalUpdates": {
                "type": "OBJECT",
                "properties": {
                    "netWorth": { "type": "NUMBER" },
                    "cash": { "type": "NUMBER" },
                    "portfolio": { "type": "NUMBER" },
                    "investments": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": { "type": "STRING" },
                                "type": { "type": "STRING", "enum": InvestmentKind::labels() },
                                "amount": { "type": "NUMBER" },
                                "monthlyYield": { "type": "NUMBER" },
                                "yieldRate": { "type": "NUMBER" }
                            },
                            "required": ["name", "type", "amount", "monthlyYield", "yieldRate"]
                        }
                    },
                    "passiveIncome": { "type": "NUMBER" },
                    "lifestyleCost": { "type": "NUMBER" },
                    "surplus": { "type": "NUMBER" },
                    "stress": { "type": "NUMBER", "description": "Nível de stress acumulado (0-100)." }
                },
                "required": ["netWorth", "cash", "portfolio", "investments", "passiveIncome", "lifestyleCost", "surplus", "stress"]
            },
            "event": { "type": "STRING" },
            "options": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING", "enum": ["A", "B", "C"] },
                        "label": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "type": { "type": "STRING", "enum": ["AGGRESSIVE", "CONSERVATIVE", "CREATIVE"] }
                    },
                    "required": ["id", "label", "description", "type"]
                }
            },
            "isGameOver": { "type": "BOOLEAN" },
            "gameOverReason": { "type": "STRING" },
            "isVictory": { "type": "BOOLEAN" }
        },
        "required": ["narrative", "marketContext", "headlines", "corporateUpdates", "personalUpdates", "event", "options", "isGameOver"]
    })
}
