//! Business-context instruction for the direct-model relay.
//!
//! Embeds a JSON snapshot of the shop's operational data so the model can
//! answer data-grounded questions about deadlines, clients, stock and
//! revenue without any tool round trips.

use std::fmt::Write;

use model::{ops, order};

/// Build the Portuguese system instruction with the current mock snapshot.
#[must_use]
pub fn business_context() -> String {
    let mut prompt = String::from(
        "Você é o assistente administrativo da gráfica NBL. Responda sempre em \
         português, de forma curta e profissional, em tom executivo.\n\n\
         Banco de dados atual da operação, em formato JSON:\n",
    );

    append_dataset(&mut prompt, "Pedidos", &order::mock_orders());
    append_dataset(&mut prompt, "Funil de produção", &ops::mock_production_flow());
    append_dataset(&mut prompt, "Carga por setor", &ops::mock_sector_load());
    append_dataset(&mut prompt, "Estoque de insumos", &ops::mock_inventory());
    append_dataset(&mut prompt, "Financeiro", &ops::mock_finance());

    prompt.push_str(
        "\nInstruções:\n\
         - Utilize os dados acima para responder sobre prazos, clientes, produtos e valores.\n\
         - Se perguntarem sobre valores, some-os quando necessário.\n\
         - Cruze os dados entre si (pedidos, setores, estoque) antes de concluir.\n\
         - Aponte riscos proativamente: insumos críticos, setores acima de 80% de carga \
         e entregas programadas para amanhã.\n\
         - O tom deve ser amigável mas focado em dados.\n",
    );

    prompt
}

fn append_dataset<T: serde::Serialize>(prompt: &mut String, label: &str, data: &T) {
    let json = serde_json::to_string(data).unwrap_or_else(|_| "[]".into());
    let _ = writeln!(prompt, "{label}: {json}");
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
