//! Price aggregation over a pet's medicines and remote store listings.
//!
//! Pure computation: the board is built from one association list and one
//! listing sweep, then answers best-price and availability queries without
//! any I/O.

use rust_decimal::Decimal;
use std::cmp::Ordering;

use crate::domain::{MedicineKey, PetMedicine, StoreListing};

/// The cheapest offer found for one medicine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPrice {
    pub preco: Decimal,
    pub store_id: String,
    pub store_nome: String,
}

/// Per-medicine view row: one pet medicine with its best offer and the
/// stores carrying it.
#[derive(Debug)]
pub struct MedicineAvailability<'a> {
    pub medicine: &'a PetMedicine,
    pub best: Option<BestPrice>,
    pub stores: Vec<&'a StoreListing>,
}

/// One carried medicine inside a store's inventory view.
#[derive(Debug)]
pub struct CarriedMedicine<'a> {
    pub medicine: &'a PetMedicine,
    pub preco: Decimal,
    pub is_best_price: bool,
}

/// Per-store view row: the subset of the pet's medicines this store
/// carries.
#[derive(Debug)]
pub struct StoreInventory<'a> {
    pub store: &'a StoreListing,
    pub carried: Vec<CarriedMedicine<'a>>,
}

/// Price comparison board for one pet.
///
/// Listings are sorted by store id at construction (numeric ids first, in
/// numeric order) so that ties on price always resolve to the same store.
pub struct PriceBoard {
    medicines: Vec<PetMedicine>,
    listings: Vec<StoreListing>,
}

impl PriceBoard {
    pub fn new(medicines: Vec<PetMedicine>, mut listings: Vec<StoreListing>) -> Self {
        listings.sort_by(|a, b| match (a.id.parse::<i64>(), b.id.parse::<i64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => a.id.cmp(&b.id),
        });
        Self { medicines, listings }
    }

    pub fn medicines(&self) -> &[PetMedicine] {
        &self.medicines
    }

    pub fn listings(&self) -> &[StoreListing] {
        &self.listings
    }

    /// The minimum price for a medicine across all listings, with the store
    /// that offers it. Strict less-than scan: on a tie the store scanned
    /// first (lowest id) wins.
    pub fn best_price(&self, key: &MedicineKey) -> Option<BestPrice> {
        let mut best: Option<BestPrice> = None;
        for store in &self.listings {
            if let Some(preco) = store.price_of(key) {
                let cheaper = best.as_ref().is_none_or(|b| preco < b.preco);
                if cheaper {
                    best = Some(BestPrice {
                        preco,
                        store_id: store.id.clone(),
                        store_nome: store.nome.clone(),
                    });
                }
            }
        }
        best
    }

    /// Stores with a listing entry for the medicine, in scan order.
    pub fn stores_carrying(&self, key: &MedicineKey) -> Vec<&StoreListing> {
        self.listings.iter().filter(|s| s.carries(key)).collect()
    }

    /// Price at one specific store, if it carries the medicine.
    pub fn price_at(&self, store_id: &str, key: &MedicineKey) -> Option<Decimal> {
        self.listings
            .iter()
            .find(|s| s.id == store_id)
            .and_then(|s| s.price_of(key))
    }

    /// Per-medicine mode: every pet medicine paired with its best offer and
    /// carrying stores.
    pub fn availability_view(&self) -> Vec<MedicineAvailability<'_>> {
        self.medicines
            .iter()
            .map(|medicine| MedicineAvailability {
                medicine,
                best: self.best_price(&medicine.medicine_id),
                stores: self.stores_carrying(&medicine.medicine_id),
            })
            .collect()
    }

    /// Per-store mode: each store with at least one of the pet's medicines,
    /// carried entries annotated with whether they are that medicine's best
    /// price.
    pub fn inventory_view(&self) -> Vec<StoreInventory<'_>> {
        self.listings
            .iter()
            .filter_map(|store| {
                let carried: Vec<CarriedMedicine<'_>> = self
                    .medicines
                    .iter()
                    .filter_map(|medicine| {
                        store.price_of(&medicine.medicine_id).map(|preco| {
                            let is_best_price = self
                                .best_price(&medicine.medicine_id)
                                .is_some_and(|b| b.store_id == store.id);
                            CarriedMedicine {
                                medicine,
                                preco,
                                is_best_price,
                            }
                        })
                    })
                    .collect();

                if carried.is_empty() {
                    None
                } else {
                    Some(StoreInventory { store, carried })
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use crate::domain::ListedPrice;

    fn association(pet_id: i64, medicine_id: &str, name: &str) -> PetMedicine {
        PetMedicine {
            id: 0,
            pet_id,
            medicine_id: MedicineKey::from(medicine_id),
            medicine_name: name.to_string(),
            medicine_details: None,
            created_at: Utc::now(),
        }
    }

    fn listing(id: &str, nome: &str, prices: &[(i64, Decimal)]) -> StoreListing {
        let produtos = prices
            .iter()
            .map(|(mid, preco)| ListedPrice {
                medicamento_id: MedicineKey::from(*mid),
                preco: *preco,
            })
            .collect();
        StoreListing {
            id: id.to_string(),
            nome: nome.to_string(),
            endereco: None,
            produtos,
        }
    }

    #[test]
    fn best_price_picks_the_minimum_across_stores() {
        let board = PriceBoard::new(
            vec![association(1, "7", "Dipirona 500mg")],
            vec![
                listing("1", "Loja A", &[(7, dec!(42.50))]),
                listing("2", "Loja B", &[(7, dec!(39.00))]),
            ],
        );

        let best = board.best_price(&MedicineKey::from("7")).unwrap();
        assert_eq!(best.preco, dec!(39.00));
        assert_eq!(best.store_nome, "Loja B");
    }

    #[test]
    fn best_price_is_none_when_no_store_carries_it() {
        let board = PriceBoard::new(
            vec![association(1, "9", "Vermífugo")],
            vec![listing("1", "Loja A", &[(7, dec!(10.00))])],
        );
        assert!(board.best_price(&MedicineKey::from("9")).is_none());
    }

    #[test]
    fn ties_resolve_to_the_lowest_store_id() {
        // constructed out of order on purpose
        let board = PriceBoard::new(
            vec![association(1, "7", "Dipirona 500mg")],
            vec![
                listing("10", "Loja C", &[(7, dec!(20.00))]),
                listing("2", "Loja B", &[(7, dec!(20.00))]),
            ],
        );

        let best = board.best_price(&MedicineKey::from("7")).unwrap();
        assert_eq!(best.store_id, "2");
    }

    #[test]
    fn int_and_string_medicine_ids_compare_equal() {
        let board = PriceBoard::new(
            vec![association(1, "7", "Dipirona 500mg")],
            vec![listing("1", "Loja A", &[(7, dec!(12.00))])],
        );
        // association key came from text, listing key from an integer
        assert!(board.best_price(&MedicineKey::from("7")).is_some());
    }

    #[test]
    fn availability_view_covers_every_pet_medicine() {
        let board = PriceBoard::new(
            vec![
                association(1, "7", "Dipirona 500mg"),
                association(1, "9", "Vermífugo"),
            ],
            vec![
                listing("1", "Loja A", &[(7, dec!(42.50))]),
                listing("2", "Loja B", &[(7, dec!(39.00))]),
            ],
        );

        let view = board.availability_view();
        assert_eq!(view.len(), 2);

        assert_eq!(view[0].best.as_ref().unwrap().preco, dec!(39.00));
        assert_eq!(view[0].stores.len(), 2);

        assert!(view[1].best.is_none());
        assert!(view[1].stores.is_empty());
    }

    #[test]
    fn inventory_view_skips_stores_with_nothing_carried_and_flags_best() {
        let board = PriceBoard::new(
            vec![association(1, "7", "Dipirona 500mg")],
            vec![
                listing("1", "Loja A", &[(7, dec!(42.50))]),
                listing("2", "Loja B", &[(7, dec!(39.00))]),
                listing("3", "Loja C", &[(8, dec!(5.00))]),
            ],
        );

        let view = board.inventory_view();
        assert_eq!(view.len(), 2); // Loja C carries none of the pet's medicines

        let a = &view[0];
        assert_eq!(a.store.nome, "Loja A");
        assert!(!a.carried[0].is_best_price);

        let b = &view[1];
        assert_eq!(b.store.nome, "Loja B");
        assert!(b.carried[0].is_best_price);
        assert_eq!(b.carried[0].preco, dec!(39.00));
    }

    #[test]
    fn price_at_looks_up_one_store() {
        let board = PriceBoard::new(
            vec![],
            vec![listing("1", "Loja A", &[(7, dec!(42.50))])],
        );
        assert_eq!(
            board.price_at("1", &MedicineKey::from(7)),
            Some(dec!(42.50))
        );
        assert_eq!(board.price_at("2", &MedicineKey::from(7)), None);
    }
}
