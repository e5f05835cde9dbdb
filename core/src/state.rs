//! Game state data model.
//!
//! These are the wire shapes shared with the narrative generator: the full
//! GameState is serialized into every turn prompt, and the generator's
//! responses deserialize into the same records. Field names stay camelCase
//! because that is the vocabulary the response schema declares.
//!
//! RULES:
//!   - Enumerated concepts (investment kind, option kind, health) are closed
//!     enums. An unknown label is a deserialization failure, never a
//!     silently-ignored string.
//!   - The client computes nothing: every number here was produced by the
//!     generator, except the turn-0 seed built from the chosen archetype.

use crate::types::{Money, Rate, Turn};
use serde::{Deserialize, Serialize};

/// Upper bound of the personal stress gauge. The generator is responsible
/// for clamping; the client only flags violations.
pub const MAX_STRESS: f64 = 100.0;

/// Preset surplus-allocation strategies offered alongside free text.
pub const SURPLUS_PRESETS: [&str; 4] = [
    "Reinvestir na Empresa",
    "Comprar Ações",
    "Guardar Dinheiro",
    "Melhorar Estilo de Vida",
];

/// One month of corporate results, kept for trend display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    pub month: Turn,
    pub revenue: Money,
    pub expenses: Money,
    pub profit: Money,
}

/// Corporate health classification. Schema-enforced vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorporateHealth {
    #[serde(rename = "Saudável")]
    Saudavel,
    #[serde(rename = "Solvente")]
    Solvente,
    #[serde(rename = "Alavancada")]
    Alavancada,
    #[serde(rename = "Crítica")]
    Critica,
    #[serde(rename = "Falência")]
    Falencia,
}

impl CorporateHealth {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Saudavel => "Saudável",
            Self::Solvente => "Solvente",
            Self::Alavancada => "Alavancada",
            Self::Critica => "Crítica",
            Self::Falencia => "Falência",
        }
    }

    /// All labels, in the order the response schema declares them.
    pub fn labels() -> [&'static str; 5] {
        ["Saudável", "Solvente", "Alavancada", "Crítica", "Falência"]
    }
}

/// The corporate (PJ) ledger. Replaced wholesale every turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateFinance {
    pub cash: Money,
    /// Monthly gross revenue.
    pub revenue: Money,
    /// OpEx + COGS.
    pub expenses: Money,
    pub debt_service: Money,
    pub valuation: Money,
    pub health: CorporateHealth,
    /// Month-by-month snapshots when the generator chooses to carry them.
    /// Absent until enough months exist; views render a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<FinancialSnapshot>>,
}

/// Investment class. Schema-enforced vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentKind {
    #[serde(rename = "Renda Fixa")]
    RendaFixa,
    #[serde(rename = "Ações")]
    Acoes,
    #[serde(rename = "FIIs")]
    Fiis,
    #[serde(rename = "Cripto")]
    Cripto,
    #[serde(rename = "Reserva")]
    Reserva,
}

impl InvestmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::RendaFixa => "Renda Fixa",
            Self::Acoes => "Ações",
            Self::Fiis => "FIIs",
            Self::Cripto => "Cripto",
            Self::Reserva => "Reserva",
        }
    }

    pub fn labels() -> [&'static str; 5] {
        ["Renda Fixa", "Ações", "FIIs", "Cripto", "Reserva"]
    }
}

/// A single holding in the personal portfolio. The generator carries the
/// whole list forward each turn; the client never merges or reconciles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: InvestmentKind,
    pub amount: Money,
    /// Value gained or lost this month, in currency.
    pub monthly_yield: Money,
    /// This month's yield as a fraction of the position.
    pub yield_rate: Rate,
}

/// The personal (PF) ledger. Replaced wholesale every turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalFinance {
    pub net_worth: Money,
    pub cash: Money,
    pub portfolio: Money,
    pub investments: Vec<Investment>,
    pub passive_income: Money,
    pub lifestyle_cost: Money,
    pub surplus: Money,
    /// 0 to 100. Burnout territory starts at the top of the band.
    pub stress: f64,
}

impl PersonalFinance {
    /// The empty ledger a founder starts with: everything at zero,
    /// no holdings, baseline stress.
    pub fn zeroed() -> Self {
        Self {
            net_worth: 0.0,
            cash: 0.0,
            portfolio: 0.0,
            investments: Vec::new(),
            passive_income: 0.0,
            lifestyle_cost: 0.0,
            surplus: 0.0,
            stress: 0.0,
        }
    }
}

/// A selectable starting persona. Presented at setup, immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub id: String,
    pub name: String,
    pub description: String,
    pub starting_capital: Money,
    pub unique_asset: String,
    pub critical_flaw: String,
}

/// The antagonist generated at setup. Woven into narratives by the
/// generator; the client only displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rival {
    pub name: String,
    pub company_name: String,
    pub description: String,
    pub archetype: String,
}

/// Identifier of one of the (up to) three options offered each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionId {
    A,
    B,
    C,
}

impl OptionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Lenient parse for player input ("a", "B", " c ").
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            "C" | "c" => Some(Self::C),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategic flavor of an option. Schema-enforced vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionKind {
    Aggressive,
    Conservative,
    Creative,
}

impl OptionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Aggressive => "AGGRESSIVE",
            Self::Conservative => "CONSERVATIVE",
            Self::Creative => "CREATIVE",
        }
    }
}

/// One of the choices offered for the current dilemma.
/// Consumed exactly once per turn when the player picks one by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOption {
    pub id: OptionId,
    pub label: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: OptionKind,
}

/// One month in the append-only narrative log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeEntry {
    pub month: Turn,
    pub text: String,
    pub event_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_made: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome_summary: Option<String>,
}

/// The player's answer to a turn: one option plus where the personal
/// surplus goes (preset strategy or free text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub choice_id: OptionId,
    pub surplus_allocation: String,
}

/// The authoritative snapshot. Created once per session at turn 0 and then
/// derived immutably from each accepted turn response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Month count. Invariant: equals narrative_log.len() once play started.
    pub turn: Turn,
    pub player_name: String,
    pub company_name: String,
    pub archetype_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rival: Option<Rival>,

    // Macro indicators
    pub inflation_rate: Rate,
    pub interest_rate: Rate,
    /// Coarse regime label: "Bull Market", "Bear Market", "Recessão",
    /// "Crash", "Estagnado". Narrative flavor, not pattern-matched.
    pub market_mood: String,

    pub narrative_log: Vec<NarrativeEntry>,

    pub corporate: CorporateFinance,
    pub personal: PersonalFinance,

    // Current turn data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headlines: Option<Vec<String>>,
    /// Empty once is_game_over is true.
    pub current_options: Vec<GameOption>,

    pub is_game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_over_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_victory: Option<bool>,
}

impl GameState {
    /// The turn-0 seed for a freshly chosen archetype. Corporate cash and
    /// valuation start at the archetype's capital; the personal ledger is
    /// zeroed. Everything else waits for the first turn response.
    pub fn initial(
        archetype: &Archetype,
        player_name: &str,
        company_name: &str,
        market_mood: &str,
        rival: Option<Rival>,
    ) -> Self {
        Self {
            turn: 0,
            player_name: player_name.to_string(),
            company_name: company_name.to_string(),
            archetype_id: archetype.id.clone(),
            rival,
            inflation_rate: 0.0,
            interest_rate: 0.0,
            market_mood: market_mood.to_string(),
            narrative_log: Vec::new(),
            corporate: CorporateFinance {
                cash: archetype.starting_capital,
                revenue: 0.0,
                expenses: 0.0,
                debt_service: 0.0,
                valuation: archetype.starting_capital,
                health: CorporateHealth::Solvente,
                history: None,
            },
            personal: PersonalFinance::zeroed(),
            current_event: None,
            headlines: None,
            current_options: Vec::new(),
            is_game_over: false,
            game_over_reason: None,
            is_victory: None,
        }
    }

    /// The most recent narrative entry, if play has started.
    pub fn latest_narrative(&self) -> Option<&NarrativeEntry> {
        self.narrative_log.last()
    }
}
