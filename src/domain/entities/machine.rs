use serde::{Deserialize, Serialize};

/// Fixed verification and repair procedure shown on the maintenance report.
pub const REPAIR_STEPS: [&str; 6] = [
    "1. Garantir segurança: isolar e sinalizar a área.",
    "2. Despressurizar o compartimento e desligar a máquina.",
    "3. Remover tampa lateral e inspecionar juntas e válvulas.",
    "4. Substituir anéis de vedação e a válvula defeituosa, se identificada.",
    "5. Reapertar conexões, recolocar tampa e realizar teste com baixa pressão.",
    "6. Registrar resultado e reabrir produção quando seguro.",
];

/// A spare part requested for the repair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparePart {
    pub name: String,
    pub quantity: u32,
}

/// Static machine and ticket data shown on the dashboard and the report.
///
/// These are configuration constants, not simulation output; the defaults
/// carry the demo dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineProfile {
    pub company: String,
    pub machine_id: String,
    pub last_maintenance_date: String,
    pub last_maintenance_desc: String,
    pub defect: String,
    pub authorized: bool,
    pub ticket: String,
    pub technicians: Vec<String>,
    pub parts: Vec<SparePart>,
}

impl Default for MachineProfile {
    fn default() -> Self {
        Self {
            company: "Reply".to_string(),
            machine_id: "A2203".to_string(),
            last_maintenance_date: "18/09/2025".to_string(),
            last_maintenance_desc:
                "Substituição de junta e verificação de válvulas. Desgaste moderado em conexões."
                    .to_string(),
            defect: "Vazamento na máquina (compartimento de pressão - lado direito).".to_string(),
            authorized: true,
            ticket: "TKT-092311".to_string(),
            technicians: vec![
                "João R.".to_string(),
                "Carla M.".to_string(),
                "Renan O.".to_string(),
            ],
            parts: vec![
                SparePart {
                    name: "Válvula tipo B".to_string(),
                    quantity: 1,
                },
                SparePart {
                    name: "Anel de vedação".to_string(),
                    quantity: 2,
                },
                SparePart {
                    name: "Tubo conector".to_string(),
                    quantity: 1,
                },
            ],
        }
    }
}
