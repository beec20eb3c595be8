//! End-to-end quoting against the built-in catalogs

use chrono::NaiveDate;
use proposta_app::{Config, ProposalService};
use proposta_types::{ConsultDuration, Error, LeadContact, PricingError, PricingRequest};
use std::path::PathBuf;
use tempfile::tempdir;

fn staffing() -> ProposalService {
    ProposalService::from_config(&Config::default()).expect("staffing catalog loads")
}

fn on_demand_30(patients: u32) -> PricingRequest {
    PricingRequest::new("agenda-on-demand", patients).with_duration(ConsultDuration::Min30)
}

#[test]
fn test_no_discount_below_fifteen() {
    let quote = staffing().quote(&on_demand_30(10)).unwrap();
    assert_eq!(quote.discount_rate, 0.0);
    assert_eq!(quote.unit_price, 110.0);
    assert_eq!(quote.total_monthly, quote.unit_price * 10.0);
}

#[test]
fn test_ten_percent_at_thirty() {
    let quote = staffing().quote(&on_demand_30(30)).unwrap();
    assert_eq!(quote.discount_rate, 0.10);
    assert_eq!(quote.unit_price, 110.0 * (1.0 - 0.10));
}

#[test]
fn test_fifteen_percent_at_fifty() {
    let quote = staffing().quote(&on_demand_30(50)).unwrap();
    assert_eq!(quote.discount_rate, 0.15);
    assert_eq!(quote.unit_price, 110.0 * (1.0 - 0.15));
}

#[test]
fn test_bundle_flat_price() {
    let quote = staffing()
        .quote(&PricingRequest::new("pacotes-atendimento", 5))
        .unwrap();
    assert_eq!(quote.unit_price, 450.0);
    assert_eq!(quote.total_monthly, 450.0 * 5.0);
    assert_eq!(
        quote.includes,
        vec![
            "Múltiplas especialidades incluídas",
            "Acompanhamento integrado do paciente",
            "Relatórios unificados",
            "Gestão centralizada",
        ]
    );
}

#[test]
fn test_discount_tiers_across_volumes() {
    let service = staffing();
    let expected = |patients: u32| match patients {
        0..=14 => 0.0,
        15..=29 => 0.05,
        30..=49 => 0.10,
        _ => 0.15,
    };

    for patients in 1..=120 {
        let quote = service.quote(&on_demand_30(patients)).unwrap();
        assert_eq!(quote.discount_rate, expected(patients), "patients = {}", patients);
        assert_eq!(quote.total_monthly, quote.unit_price * f64::from(patients));
    }
}

#[test]
fn test_dedicated_schedule_accepts_shared_alias() {
    let service = staffing();
    let by_id = service
        .quote(&PricingRequest::new("agenda-dedicada", 12).with_duration(ConsultDuration::Min25))
        .unwrap();
    let by_alias = service
        .quote(
            &PricingRequest::new("agenda-compartilhada", 12).with_duration(ConsultDuration::Min25),
        )
        .unwrap();

    assert_eq!(by_id, by_alias);
    assert_eq!(by_id.unit_price, 75.0);
}

#[test]
fn test_invalid_inputs_are_typed_errors() {
    let service = staffing();

    let err = service.quote(&on_demand_30(0)).unwrap_err();
    assert!(matches!(err, Error::Pricing(PricingError::InvalidPatientVolume(0))));

    let err = service
        .quote(&PricingRequest::new("retorno-implante-capilar", 10))
        .unwrap_err();
    assert!(matches!(err, Error::Pricing(PricingError::UnknownService(_))));

    assert_eq!(
        ConsultDuration::try_from(35u32),
        Err(PricingError::InvalidDuration(35))
    );
}

#[test]
fn test_follow_up_care_catalog_shares_the_engine() {
    let config = Config {
        catalog: "follow-up-care".to_string(),
        ..Config::default()
    };
    let service = ProposalService::from_config(&config).unwrap();

    let bundle = service
        .quote(&PricingRequest::new("pacote-pos-operatorio", 60).with_duration(ConsultDuration::Min40))
        .unwrap();
    assert_eq!(bundle.unit_price, 450.0);
    assert_eq!(bundle.discount_rate, 0.0);
    assert_eq!(bundle.consult_duration, None);

    let cardiology = service
        .quote(&PricingRequest::new("pre-operatorio", 50))
        .unwrap();
    assert_eq!(cardiology.service_id, "pre-operatorio-cardiologico");
    assert_eq!(cardiology.unit_price, 110.0 * (1.0 - 0.15));
}

#[test]
fn test_catalog_file_overrides_builtin() {
    let dir = tempdir().unwrap();
    let path: PathBuf = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        r#"
name = "custom"
title = "Custom"
discounts = [{ min_patients = 10, rate = 0.2 }]

[[services]]
id = "plantao"
name = "Plantão"
summary = "Plantão"
description = "Plantão médico"

[services.pricing]
type = "per-duration"
prices = [{ minutes = 40, price = 200.0 }]
"#,
    )
    .unwrap();

    let config = Config {
        catalog_file: Some(path),
        ..Config::default()
    };
    let service = ProposalService::from_config(&config).unwrap();
    assert_eq!(service.catalog().name, "custom");

    let quote = service
        .quote(&PricingRequest::new("plantao", 10).with_duration(ConsultDuration::Min40))
        .unwrap();
    assert_eq!(quote.unit_price, 200.0 * (1.0 - 0.2));

    let err = service.quote(&PricingRequest::new("plantao", 10)).unwrap_err();
    assert!(matches!(
        err,
        Error::Pricing(PricingError::MissingPrice { minutes: 30, .. })
    ));
}

#[test]
fn test_proposal_report_end_to_end() {
    let service = staffing();
    let lead = LeadContact {
        company_name: "Hospital Santa Clara".to_string(),
        email: "compras@santaclara.org.br".to_string(),
        phone: "(21) 3333-4444".to_string(),
    };
    let issued_on = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

    let proposal = service
        .propose(lead, &on_demand_30(50), issued_on)
        .unwrap();
    let report = service.render(&proposal);

    assert!(report.contains("Hospital Santa Clara"));
    assert!(report.contains("15/01/2026"));
    assert!(report.contains("14/02/2026"));
    assert!(report.contains("R$ 93,50"));
    assert!(report.contains("R$ 4.675,00"));
}
