// ============================================================================
// Realty Core - Transaction Resolver
// File: crates/realty-core/src/services/transaction_resolver.rs
// Description: Looks up the sale, letting, or introduction a reference points at
// ============================================================================

use tracing::debug;

use crate::domain::{Introduction, Letting, Record, Sale, TransactionRef, TransactionType};
use crate::error::DomainError;
use crate::repositories::DynRepository;
use realty_shared::TenantId;

/// A transaction fetched through its [`TransactionRef`].
#[derive(Debug, Clone)]
pub enum ResolvedTransaction {
    Sale(Record<Sale>),
    Letting(Record<Letting>),
    Introduction(Record<Introduction>),
}

impl ResolvedTransaction {
    /// Multiplicand for percentage commissions.
    pub fn base_value(&self) -> f64 {
        match self {
            ResolvedTransaction::Sale(sale) => sale.data.sale_price,
            ResolvedTransaction::Letting(letting) => letting.data.rent_amount,
            ResolvedTransaction::Introduction(intro) => intro.data.agreed_fee,
        }
    }
}

/// Read-only. Every call goes to storage; nothing is cached.
#[derive(Clone)]
pub struct TransactionResolver {
    sales: DynRepository<Sale>,
    lettings: DynRepository<Letting>,
    introductions: DynRepository<Introduction>,
}

impl TransactionResolver {
    pub fn new(
        sales: DynRepository<Sale>,
        lettings: DynRepository<Letting>,
        introductions: DynRepository<Introduction>,
    ) -> Self {
        Self {
            sales,
            lettings,
            introductions,
        }
    }

    pub async fn resolve(
        &self,
        tenant_id: &TenantId,
        reference: TransactionRef,
    ) -> Result<ResolvedTransaction, DomainError> {
        let TransactionRef {
            transaction_type,
            transaction_id,
        } = reference;
        debug!("Resolving {} {} for tenant {}", transaction_type, transaction_id, tenant_id);

        let resolved = match transaction_type {
            TransactionType::Sale => self
                .sales
                .get_by_id(tenant_id, transaction_id)
                .await
                .map(ResolvedTransaction::Sale),
            TransactionType::Letting => self
                .lettings
                .get_by_id(tenant_id, transaction_id)
                .await
                .map(ResolvedTransaction::Letting),
            TransactionType::Introduction => self
                .introductions
                .get_by_id(tenant_id, transaction_id)
                .await
                .map(ResolvedTransaction::Introduction),
        };

        resolved.map_err(|err| match err {
            DomainError::NotFound(_) => DomainError::TransactionNotFound {
                transaction_type,
                transaction_id,
            },
            other => other,
        })
    }
}
