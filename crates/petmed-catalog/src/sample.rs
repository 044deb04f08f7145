//! Bundled offline fallback data.
//!
//! Served when every candidate endpoint fails, so the app stays usable
//! without a reachable catalog server.

use rust_decimal::Decimal;

use petmed_core::domain::{ListedPrice, Medicine, MedicineKey, StoreListing};

/// Sample medicine catalog for offline mode.
pub fn sample_medicines() -> Vec<Medicine> {
    vec![
        Medicine {
            id: 1,
            nome: "Dipirona 500mg".to_string(),
            ean: Some("7891234567890".to_string()),
            tipo: Some("Analgésico".to_string()),
            laboratorio: Some("EMS".to_string()),
            forma_administracao: Some("Comprimido".to_string()),
            indicacoes: Some("Dor e febre".to_string()),
        },
        Medicine {
            id: 2,
            nome: "Paracetamol 750mg".to_string(),
            ean: Some("7891234567891".to_string()),
            tipo: Some("Analgésico".to_string()),
            laboratorio: Some("Medley".to_string()),
            forma_administracao: Some("Comprimido".to_string()),
            indicacoes: Some("Dor de cabeça e febre".to_string()),
        },
        Medicine {
            id: 3,
            nome: "Ibuprofeno 600mg".to_string(),
            ean: Some("7891234567892".to_string()),
            tipo: Some("Anti-inflamatório".to_string()),
            laboratorio: Some("Eurofarma".to_string()),
            forma_administracao: Some("Comprimido".to_string()),
            indicacoes: Some("Dor e inflamação".to_string()),
        },
    ]
}

/// Sample store listings for offline mode, priced over the sample catalog.
pub fn sample_listings() -> Vec<StoreListing> {
    vec![
        StoreListing {
            id: "1".to_string(),
            nome: "PetCenter Araxá".to_string(),
            endereco: Some("Rua das Flores, 123 - Araxá, MG".to_string()),
            produtos: vec![
                listed(1, Decimal::new(4250, 2)),
                listed(2, Decimal::new(1890, 2)),
            ],
        },
        StoreListing {
            id: "2".to_string(),
            nome: "Farmácia Animal".to_string(),
            endereco: Some("Av. Brasil, 456 - Araxá, MG".to_string()),
            produtos: vec![
                listed(1, Decimal::new(3900, 2)),
                listed(3, Decimal::new(2750, 2)),
            ],
        },
        StoreListing {
            id: "3".to_string(),
            nome: "AgroVet Sul".to_string(),
            endereco: Some("Rua Sete de Setembro, 89 - Araxá, MG".to_string()),
            produtos: vec![
                listed(2, Decimal::new(1790, 2)),
                listed(3, Decimal::new(2990, 2)),
            ],
        },
    ]
}

fn listed(medicine_id: i64, preco: Decimal) -> ListedPrice {
    ListedPrice {
        medicamento_id: MedicineKey::from(medicine_id),
        preco,
    }
}
