//! Prompt text sent to the narrative generator.
//!
//! The system instruction encodes the game rules (turn cadence, PJ/PF
//! ledger separation, stress mechanics, rival behavior, victory and defeat
//! conditions). It is configuration handed to the generator, not logic the
//! client evaluates itself.

use crate::error::GameResult;
use crate::state::{Decision, GameState};

/// Reasoning budget granted to the generator when resolving a turn.
pub const TURN_THINKING_BUDGET: u32 = 2048;

pub const SYSTEM_INSTRUCTION: &str = r#"
IDENTIDADE E OBJETIVO
Você é o "Mestre do Jogo Financeiro", uma IA sofisticada que simula uma jornada empresarial hiper-realista e de alto risco.
Tom: Mentor rigoroso, analítico (CFO de Wall Street), narrativa vívida.
Dificuldade: HARDCORE.

REGRAS CENTRAIS:
1.  **Separação Patrimonial**: Finanças Corporativas (PJ) e Pessoais (PF) são distintas.
2.  **Economia Viva**: Crie "Breaking News" (Manchetes) que dão pistas sobre o mercado.
3.  **Rivalidade**: O jogador tem um RIVAL definido. Inclua ações desse rival na narrativa ocasionalmente (ex: roubando clientes, sabotagem, ofertas hostis).
4.  **Saúde Mental (STRESS)**:
    *   Monitore o nível de Stress (0 a 100) na PF.
    *   Decisões "AGGRESSIVE" ou crises aumentam o Stress (+10 a +25).
    *   Gastar excedente em "Lifestyle" ou tirar férias (opções Conservative) reduz o Stress (-10 a -30).
    *   Se Stress >= 100: Ocorrer um "BURNOUT". O jogador vai para o hospital, paga uma conta alta e perde produtividade (lucro cai).
5.  **Cash Drag**: Inflação corrói dinheiro parado.
6.  **Vitória**: Patrimônio Líquido PF > R$ 5.000.000 + Renda Passiva > Custo de Vida.

ATMOSFERA DE MERCADO (marketMood):
Classifique sempre como: "Bull Market" (Otimismo), "Bear Market" (Pessimismo), "Recessão", "Crash" ou "Estagnado".

FORMATO DE SAÍDA:
Responda APENAS em JSON limpo.
"#;

/// Setup request: introduction, three player archetypes, one rival.
pub fn setup_prompt() -> String {
    "Inicialize a Fase 1: A Configuração. Introdução, 3 arquétipos de jogador e 1 RIVAL \
     (Antagonista) que competirá com o jogador."
        .to_string()
}

/// Turn request. At turn 0 the state is a seed and carries no decision;
/// afterwards the full state JSON and the player's decision are embedded.
pub fn turn_prompt(state: &GameState, decision: Option<&Decision>) -> GameResult<String> {
    if state.turn == 0 {
        let rival = match &state.rival {
            Some(r) => serde_json::to_string(r)?,
            None => "Desconhecido".to_string(),
        };
        return Ok(format!(
            "INICIAR JOGO.\n\
             Nome: {player}\n\
             Empresa: {company}\n\
             Arquétipo: {archetype}\n\
             Rival: {rival}\n\n\
             Gere estatísticas Mês 1. Defina stress inicial baixo (0-10).",
            player = state.player_name,
            company = state.company_name,
            archetype = state.archetype_id,
        ));
    }

    let state_json = serde_json::to_string_pretty(state)?;
    let (choice, allocation) = match decision {
        Some(d) => (d.choice_id.as_str(), d.surplus_allocation.as_str()),
        None => ("?", "Desconhecida"),
    };
    let rival_name = state
        .rival
        .as_ref()
        .map(|r| r.name.as_str())
        .unwrap_or("Desconhecido");

    Ok(format!(
        "RESOLVER TURNO {current} -> GERAR TURNO {next}.\n\n\
         ESTADO ATUAL:\n{state_json}\n\n\
         DECISÃO:\n\
         Escolha: {choice}\n\
         Alocação Excedente: {allocation}\n\n\
         LEMBRETE: Atualize o 'stress' na PF baseado na decisão. Se > 100, cause Burnout.\n\
         LEMBRETE: O Rival ({rival_name}) deve estar fazendo algo.",
        current = state.turn,
        next = state.turn + 1,
    ))
}
