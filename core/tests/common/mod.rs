//! Shared test support: a scripted narrative generator.
#![allow(dead_code)]

use std::cell::RefCell;
use tycoon_core::error::{GameError, GameResult};
use tycoon_core::generator::{NarrativeGenerator, SetupResponse, TurnResponse};
use tycoon_core::state::{
    Archetype, CorporateFinance, CorporateHealth, Decision, GameOption, GameState, Investment,
    InvestmentKind, OptionId, OptionKind, PersonalFinance, Rival,
};

/// Scripted generator: one setup payload plus a queue of turn outcomes,
/// drained front-first. Everything handed to process_turn is captured so
/// tests can assert on what the client actually sent.
pub struct ScriptedGenerator {
    setup: Option<SetupResponse>,
    turns: RefCell<Vec<GameResult<TurnResponse>>>,
    pub seen_states: RefCell<Vec<GameState>>,
    pub seen_decisions: RefCell<Vec<Option<Decision>>>,
}

impl ScriptedGenerator {
    pub fn new(setup: Option<SetupResponse>, turns: Vec<GameResult<TurnResponse>>) -> Self {
        Self {
            setup,
            turns: RefCell::new(turns),
            seen_states: RefCell::new(Vec::new()),
            seen_decisions: RefCell::new(Vec::new()),
        }
    }

    /// Generator with the standard setup and the given turn queue.
    pub fn with_turns(turns: Vec<GameResult<TurnResponse>>) -> Self {
        Self::new(Some(sample_setup()), turns)
    }
}

impl NarrativeGenerator for ScriptedGenerator {
    fn fetch_setup(&self) -> GameResult<SetupResponse> {
        self.setup.clone().ok_or(GameError::EmptyResponse)
    }

    fn process_turn(
        &self,
        state: &GameState,
        decision: Option<&Decision>,
    ) -> GameResult<TurnResponse> {
        self.seen_states.borrow_mut().push(state.clone());
        self.seen_decisions.borrow_mut().push(decision.cloned());
        let mut turns = self.turns.borrow_mut();
        if turns.is_empty() {
            return Err(GameError::EmptyResponse);
        }
        turns.remove(0)
    }
}

/// Three archetypes in presentation order, "Hacker de Garagem" first.
pub fn sample_setup() -> SetupResponse {
    SetupResponse {
        intro: "O mercado não perdoa amadores.".to_string(),
        market_mood: "Bull Market".to_string(),
        archetypes: vec![
            Archetype {
                id: "hacker".to_string(),
                name: "Hacker de Garagem".to_string(),
                description: "Código primeiro, perguntas depois.".to_string(),
                starting_capital: 10_000.0,
                unique_asset: "Protótipo funcional".to_string(),
                critical_flaw: "Zero rede de contatos".to_string(),
            },
            Archetype {
                id: "herdeira".to_string(),
                name: "Herdeira Rebelde".to_string(),
                description: "Capital alto, paciência baixa.".to_string(),
                starting_capital: 250_000.0,
                unique_asset: "Rede de contatos da família".to_string(),
                critical_flaw: "Queima caixa com estilo".to_string(),
            },
            Archetype {
                id: "consultor".to_string(),
                name: "Consultor Cansado".to_string(),
                description: "Dez anos de corporação, um plano.".to_string(),
                starting_capital: 80_000.0,
                unique_asset: "Carteira de clientes fiéis".to_string(),
                critical_flaw: "Avesso a risco".to_string(),
            },
        ],
        rival: Rival {
            name: "Otávio Blindado".to_string(),
            company_name: "Blindado Holdings".to_string(),
            description: "Acha que o seu mercado é dele por direito.".to_string(),
            archetype: "Tubarão de M&A".to_string(),
        },
    }
}

/// A normal non-terminal turn: three options, sane stress, headlines.
pub fn sample_turn() -> TurnResponse {
    TurnResponse {
        narrative: "O mês foi brutal, mas a empresa respira.".to_string(),
        market_context: "Bear Market".to_string(),
        inflation_rate: 0.0045,
        interest_rate: 0.0105,
        headlines: vec![
            "Banco Central sobe juros de novo".to_string(),
            "Rodada de demissões no setor".to_string(),
            "Cripto derrete 18% em uma semana".to_string(),
        ],
        corporate_updates: CorporateFinance {
            cash: 14_500.0,
            revenue: 9_000.0,
            expenses: 6_200.0,
            debt_service: 300.0,
            valuation: 52_000.0,
            health: CorporateHealth::Solvente,
            history: None,
        },
        personal_updates: PersonalFinance {
            net_worth: 8_200.0,
            cash: 3_100.0,
            portfolio: 5_100.0,
            investments: vec![Investment {
                name: "Tesouro Selic 2029".to_string(),
                kind: InvestmentKind::RendaFixa,
                amount: 5_100.0,
                monthly_yield: 52.0,
                yield_rate: 0.0102,
            }],
            passive_income: 52.0,
            lifestyle_cost: 2_400.0,
            surplus: 700.0,
            stress: 22.0,
        },
        event: "Um cliente âncora ameaça sair se o preço não cair 30%.".to_string(),
        options: vec![
            option(OptionId::A, OptionKind::Aggressive, "Recusar e dobrar o preço"),
            option(OptionId::B, OptionKind::Conservative, "Ceder o desconto"),
            option(OptionId::C, OptionKind::Creative, "Propor contrato anual"),
        ],
        is_game_over: false,
        game_over_reason: None,
        is_victory: None,
    }
}

/// A terminal turn response, defeat by default.
pub fn terminal_turn(victory: bool) -> TurnResponse {
    let mut turn = sample_turn();
    turn.is_game_over = true;
    turn.is_victory = if victory { Some(true) } else { None };
    turn.game_over_reason = Some(if victory {
        "Renda passiva superou o custo de vida. Liberdade.".to_string()
    } else {
        "O caixa acabou e o banco não atendeu.".to_string()
    });
    turn
}

pub fn option(id: OptionId, kind: OptionKind, label: &str) -> GameOption {
    GameOption {
        id,
        label: label.to_string(),
        description: format!("{label}, com todas as consequências."),
        kind,
    }
}
