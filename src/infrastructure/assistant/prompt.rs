//! Builds the system instruction sent to the chat completion endpoint.

use std::fmt::Write;

use crate::domain::entities::{MachineProfile, Summary};

/// Assembles the Portuguese system prompt for the maintenance assistant.
///
/// The prompt carries the persona, the summary of the monitored window and
/// the maintenance record of the machine. Only the current question travels
/// alongside it, never the conversation history.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Renders the system instruction for one question.
    #[must_use]
    pub fn system(summary: &Summary, machine: &MachineProfile) -> String {
        let mut prompt = String::with_capacity(1024);

        let _ = writeln!(
            prompt,
            "Você é a EVA, assistente virtual de manutenção industrial da {}.",
            machine.company
        );
        let _ = writeln!(
            prompt,
            "Responda sempre em português, de forma curta e objetiva, \
             como num diálogo técnico por rádio."
        );
        prompt.push('\n');

        let _ = writeln!(
            prompt,
            "Os dados abaixo vêm de uma simulação de monitoramento de \
             vazamentos da máquina {}.",
            machine.machine_id
        );
        let _ = writeln!(
            prompt,
            "Resumo da janela monitorada: média de {:.2} ocorrências por hora, \
             pico de {} ocorrências às {}, total de {} ocorrências.",
            summary.mean,
            summary.max,
            summary.peak_time.format("%H:%M"),
            summary.total
        );
        prompt.push('\n');

        let _ = writeln!(prompt, "Ficha de manutenção:");
        let _ = writeln!(prompt, "- Defeito reportado: {}", machine.defect);
        let _ = writeln!(
            prompt,
            "- Última manutenção: {} ({})",
            machine.last_maintenance_date, machine.last_maintenance_desc
        );
        let _ = writeln!(prompt, "- Chamado: {}", machine.ticket);
        let _ = writeln!(
            prompt,
            "- Reparo autorizado: {}",
            if machine.authorized { "sim" } else { "não" }
        );
        let _ = writeln!(
            prompt,
            "- Técnicos habilitados: {}",
            machine.technicians.join(", ")
        );

        if !machine.parts.is_empty() {
            let _ = writeln!(prompt, "- Peças reservadas:");
            for part in &machine.parts {
                let _ = writeln!(prompt, "  - {} (x{})", part.name, part.quantity);
            }
        }

        prompt.push('\n');
        let _ = writeln!(
            prompt,
            "Se a pergunta fugir da manutenção desta máquina, oriente o \
             operador a contatar o suporte da {}.",
            machine.company
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::entities::OccurrenceSeries;

    fn sample_summary() -> Summary {
        let anchor = Utc
            .with_ymd_and_hms(2025, 9, 22, 14, 0, 0)
            .single()
            .expect("valid date");
        let series = OccurrenceSeries::anchored(&[2, 9, 4], anchor).expect("valid window");
        Summary::of(&series)
    }

    #[test]
    fn system_prompt_includes_summary_figures() {
        let prompt = PromptBuilder::system(&sample_summary(), &MachineProfile::default());

        assert!(prompt.contains("média de 5.00 ocorrências por hora"));
        assert!(prompt.contains("pico de 9 ocorrências às 13:00"));
        assert!(prompt.contains("total de 15 ocorrências"));
    }

    #[test]
    fn system_prompt_includes_machine_record() {
        let machine = MachineProfile::default();
        let prompt = PromptBuilder::system(&sample_summary(), &machine);

        assert!(prompt.contains("EVA"));
        assert!(prompt.contains(&machine.company));
        assert!(prompt.contains(&machine.machine_id));
        assert!(prompt.contains(&machine.defect));
        assert!(prompt.contains(&machine.ticket));
        assert!(prompt.contains("João R., Carla M., Renan O."));
        assert!(prompt.contains("Válvula tipo B (x1)"));
    }

    #[test]
    fn system_prompt_discloses_simulated_feed() {
        let prompt = PromptBuilder::system(&sample_summary(), &MachineProfile::default());

        assert!(prompt.contains("simulação de monitoramento"));
    }

    #[test]
    fn unauthorized_repair_is_spelled_out() {
        let machine = MachineProfile {
            authorized: false,
            ..MachineProfile::default()
        };
        let prompt = PromptBuilder::system(&sample_summary(), &machine);

        assert!(prompt.contains("Reparo autorizado: não"));
    }

    #[test]
    fn empty_parts_list_omits_section() {
        let machine = MachineProfile {
            parts: Vec::new(),
            ..MachineProfile::default()
        };
        let prompt = PromptBuilder::system(&sample_summary(), &machine);

        assert!(!prompt.contains("Peças reservadas"));
    }
}
