//! Plain-text commercial proposal

use super::currency::{format_currency, format_percent};
use proposta_types::Proposal;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Render a proposal as a text document
///
/// # Arguments
/// * `proposal` - Proposal built from a validated lead and a quote
/// * `currency_symbol` - Symbol of the catalog the quote was priced from
///
/// # Returns
/// A formatted report containing:
/// - Service, issue date and expiry date
/// - Company and patient volume
/// - Per-patient value, discount and monthly total
/// - Included items and the estimate disclaimer
pub fn generate_proposal_report(proposal: &Proposal, currency_symbol: &str) -> String {
    let quote = &proposal.quote;
    let money = |amount: f64| format_currency(amount, currency_symbol);

    let mut report = String::new();

    report.push_str("==================================================\n");
    report.push_str("                Proposta Comercial                \n");
    report.push_str("==================================================\n\n");

    report.push_str(&format!("  {}\n", proposal.catalog_title));
    report.push_str(&format!("  Serviço:               {}\n", proposal.service_name));
    report.push_str(&format!(
        "  Data:                  {}\n",
        proposal.issued_on.format(DATE_FORMAT)
    ));
    report.push_str(&format!(
        "  Válida até:            {}\n\n",
        proposal.valid_until.format(DATE_FORMAT)
    ));

    report.push_str("[Empresa]\n");
    let company = proposal.lead.company_name.trim();
    report.push_str(&format!(
        "  {}\n",
        if company.is_empty() { "Não informado" } else { company }
    ));
    report.push_str(&format!("  {}\n", proposal.lead.email));
    report.push_str(&format!("  {}\n\n", proposal.lead.phone));

    report.push_str("[Pacientes/Mês]\n");
    report.push_str(&format!("  {}\n", quote.patients_per_month));
    if let Some(duration) = quote.consult_duration {
        report.push_str(&format!("  Consulta de {} min\n", duration.minutes()));
    }
    report.push('\n');

    report.push_str("[Valores]\n");
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    report.push_str(&format!(
        "  {:<26}{:>22}\n",
        "Valor por paciente",
        money(quote.unit_price)
    ));
    if quote.discount_rate > 0.0 {
        report.push_str(&format!(
            "  {:<26}{:>22}\n",
            "Desconto por volume",
            format_percent(quote.discount_rate)
        ));
    }
    report.push_str(&format!(
        "  {:<26}{:>22}\n",
        "Quantidade mensal",
        format!("{} pacientes", quote.patients_per_month)
    ));
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    report.push_str(&format!(
        "  {:<26}{:>22}\n\n",
        "Total Mensal Estimado",
        money(quote.total_monthly)
    ));

    if !quote.includes.is_empty() {
        report.push_str("[O que está incluso]\n");
        for item in &quote.includes {
            report.push_str(&format!("  * {}\n", item));
        }
        report.push('\n');
    }

    report.push_str(&format!("Observação: {}.\n", quote.description));
    report.push_str("Os valores apresentados são estimativas baseadas nas informações fornecidas.\n");
    report.push_str("O valor final pode variar de acordo com especificidades do contrato.\n\n");

    let validity_days = (proposal.valid_until - proposal.issued_on).num_days();
    report.push_str(&format!(
        "Esta proposta é válida por {} dias a partir da data de emissão.\n",
        validity_days
    ));
    report.push_str("==================================================\n");

    report
}
