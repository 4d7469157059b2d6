// ============================================================================
// Realty Infrastructure - Entity Rows
// File: crates/realty-infrastructure/src/database/postgres/entities.rs
// Description: Row structs and column bindings for each entity table
// ============================================================================

use chrono::NaiveDate;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};

use realty_core::domain::{
    Buyer, Commission, CommissionType, Installment, InstallmentPlan, InstallmentStatus, Introduction,
    Letting, LocationPricing, Payment, Property, Record, Sale, TransactionRef, TransactionType, User,
};
use realty_core::error::DomainError;

use super::pg_entity::{corrupt_column, PgEntity, RecordMetaRow};

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct PropertyRow {
    #[sqlx(flatten)]
    meta: RecordMetaRow,
    address: String,
    city: String,
    zip: String,
    listing_date: NaiveDate,
}

impl PgEntity for Property {
    const TABLE: &'static str = "properties";
    const COLUMNS: &'static [&'static str] = &["address", "city", "zip", "listing_date"];
    type Row = PropertyRow;

    fn from_row(row: PropertyRow) -> Result<Record<Self>, DomainError> {
        Ok(row.meta.into_record(Property {
            address: row.address,
            city: row.city,
            zip: row.zip,
            listing_date: row.listing_date,
        }))
    }

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values
            .push_bind(self.address.clone())
            .push_bind(self.city.clone())
            .push_bind(self.zip.clone())
            .push_bind(self.listing_date);
    }
}

// ---------------------------------------------------------------------------
// Buyer
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct BuyerRow {
    #[sqlx(flatten)]
    meta: RecordMetaRow,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
}

impl PgEntity for Buyer {
    const TABLE: &'static str = "buyers";
    const COLUMNS: &'static [&'static str] = &["first_name", "last_name", "email", "phone"];
    type Row = BuyerRow;

    fn from_row(row: BuyerRow) -> Result<Record<Self>, DomainError> {
        Ok(row.meta.into_record(Buyer {
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
        }))
    }

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values
            .push_bind(self.first_name.clone())
            .push_bind(self.last_name.clone())
            .push_bind(self.email.clone())
            .push_bind(self.phone.clone());
    }
}

// ---------------------------------------------------------------------------
// Sale
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct SaleRow {
    #[sqlx(flatten)]
    meta: RecordMetaRow,
    property_id: i64,
    buyer_id: i64,
    sale_price: f64,
    sale_date: NaiveDate,
    sale_type: String,
}

impl PgEntity for Sale {
    const TABLE: &'static str = "sales";
    const COLUMNS: &'static [&'static str] =
        &["property_id", "buyer_id", "sale_price", "sale_date", "sale_type"];
    type Row = SaleRow;

    fn from_row(row: SaleRow) -> Result<Record<Self>, DomainError> {
        Ok(row.meta.into_record(Sale {
            property_id: row.property_id,
            buyer_id: row.buyer_id,
            sale_price: row.sale_price,
            sale_date: row.sale_date,
            sale_type: row.sale_type,
        }))
    }

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values
            .push_bind(self.property_id)
            .push_bind(self.buyer_id)
            .push_bind(self.sale_price)
            .push_bind(self.sale_date)
            .push_bind(self.sale_type.clone());
    }
}

// ---------------------------------------------------------------------------
// Letting
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct LettingRow {
    #[sqlx(flatten)]
    meta: RecordMetaRow,
    property_id: i64,
    tenant_user_id: i64,
    rent_amount: f64,
    rent_term: i64,
    rent_cycle: String,
    memo: Option<String>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

impl PgEntity for Letting {
    const TABLE: &'static str = "lettings";
    const COLUMNS: &'static [&'static str] = &[
        "property_id",
        "tenant_user_id",
        "rent_amount",
        "rent_term",
        "rent_cycle",
        "memo",
        "start_date",
        "end_date",
    ];
    type Row = LettingRow;

    fn from_row(row: LettingRow) -> Result<Record<Self>, DomainError> {
        Ok(row.meta.into_record(Letting {
            property_id: row.property_id,
            tenant_user_id: row.tenant_user_id,
            rent_amount: row.rent_amount,
            rent_term: row.rent_term,
            rent_cycle: row.rent_cycle,
            memo: row.memo,
            start_date: row.start_date,
            end_date: row.end_date,
        }))
    }

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values
            .push_bind(self.property_id)
            .push_bind(self.tenant_user_id)
            .push_bind(self.rent_amount)
            .push_bind(self.rent_term)
            .push_bind(self.rent_cycle.clone())
            .push_bind(self.memo.clone())
            .push_bind(self.start_date)
            .push_bind(self.end_date);
    }
}

// ---------------------------------------------------------------------------
// Introduction
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct IntroductionRow {
    #[sqlx(flatten)]
    meta: RecordMetaRow,
    introducer_id: i64,
    introduced_party: String,
    property_id: i64,
    linked_transaction_type: Option<String>,
    linked_transaction_id: Option<i64>,
    intro_date: NaiveDate,
    agreed_fee: f64,
    fee_type: String,
}

impl PgEntity for Introduction {
    const TABLE: &'static str = "introductions";
    const COLUMNS: &'static [&'static str] = &[
        "introducer_id",
        "introduced_party",
        "property_id",
        "linked_transaction_type",
        "linked_transaction_id",
        "intro_date",
        "agreed_fee",
        "fee_type",
    ];
    type Row = IntroductionRow;

    fn from_row(row: IntroductionRow) -> Result<Record<Self>, DomainError> {
        let linked_transaction = match (row.linked_transaction_type, row.linked_transaction_id) {
            (Some(kind), Some(id)) => {
                let transaction_type = TransactionType::from_str(&kind).ok_or_else(|| {
                    corrupt_column(Self::TABLE, "linked_transaction_type", &kind)
                })?;
                Some(TransactionRef::new(transaction_type, id))
            }
            _ => None,
        };

        Ok(row.meta.into_record(Introduction {
            introducer_id: row.introducer_id,
            introduced_party: row.introduced_party,
            property_id: row.property_id,
            linked_transaction,
            intro_date: row.intro_date,
            agreed_fee: row.agreed_fee,
            fee_type: row.fee_type,
        }))
    }

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        let link = self.linked_transaction;
        values
            .push_bind(self.introducer_id)
            .push_bind(self.introduced_party.clone())
            .push_bind(self.property_id)
            .push_bind(link.map(|l| l.transaction_type.as_str().to_string()))
            .push_bind(link.map(|l| l.transaction_id))
            .push_bind(self.intro_date)
            .push_bind(self.agreed_fee)
            .push_bind(self.fee_type.clone());
    }
}

// ---------------------------------------------------------------------------
// Installment plan
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct InstallmentPlanRow {
    #[sqlx(flatten)]
    meta: RecordMetaRow,
    property_id: i64,
    buyer_id: i64,
    total_price: f64,
    down_payment: f64,
    num_installments: i32,
    frequency: String,
    first_installment: NaiveDate,
    interest_rate: f64,
}

impl PgEntity for InstallmentPlan {
    const TABLE: &'static str = "installment_plans";
    const COLUMNS: &'static [&'static str] = &[
        "property_id",
        "buyer_id",
        "total_price",
        "down_payment",
        "num_installments",
        "frequency",
        "first_installment",
        "interest_rate",
    ];
    type Row = InstallmentPlanRow;

    fn from_row(row: InstallmentPlanRow) -> Result<Record<Self>, DomainError> {
        Ok(row.meta.into_record(InstallmentPlan {
            property_id: row.property_id,
            buyer_id: row.buyer_id,
            total_price: row.total_price,
            down_payment: row.down_payment,
            num_installments: row.num_installments,
            frequency: row.frequency,
            first_installment: row.first_installment,
            interest_rate: row.interest_rate,
        }))
    }

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values
            .push_bind(self.property_id)
            .push_bind(self.buyer_id)
            .push_bind(self.total_price)
            .push_bind(self.down_payment)
            .push_bind(self.num_installments)
            .push_bind(self.frequency.clone())
            .push_bind(self.first_installment)
            .push_bind(self.interest_rate);
    }
}

// ---------------------------------------------------------------------------
// Installment
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct InstallmentRow {
    #[sqlx(flatten)]
    meta: RecordMetaRow,
    plan_id: i64,
    sequence_number: i32,
    due_date: NaiveDate,
    amount_due: f64,
    amount_paid: f64,
    status: String,
    late_fee: f64,
    paid_date: Option<NaiveDate>,
}

impl PgEntity for Installment {
    const TABLE: &'static str = "installments";
    const COLUMNS: &'static [&'static str] = &[
        "plan_id",
        "sequence_number",
        "due_date",
        "amount_due",
        "amount_paid",
        "status",
        "late_fee",
        "paid_date",
    ];
    type Row = InstallmentRow;

    fn from_row(row: InstallmentRow) -> Result<Record<Self>, DomainError> {
        let status = InstallmentStatus::from_str(&row.status)
            .ok_or_else(|| corrupt_column(Self::TABLE, "status", &row.status))?;

        Ok(row.meta.into_record(Installment {
            plan_id: row.plan_id,
            sequence_number: row.sequence_number,
            due_date: row.due_date,
            amount_due: row.amount_due,
            amount_paid: row.amount_paid,
            status,
            late_fee: row.late_fee,
            paid_date: row.paid_date,
        }))
    }

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values
            .push_bind(self.plan_id)
            .push_bind(self.sequence_number)
            .push_bind(self.due_date)
            .push_bind(self.amount_due)
            .push_bind(self.amount_paid)
            .push_bind(self.status.as_str())
            .push_bind(self.late_fee)
            .push_bind(self.paid_date);
    }
}

// ---------------------------------------------------------------------------
// Payment
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct PaymentRow {
    #[sqlx(flatten)]
    meta: RecordMetaRow,
    installment_id: i64,
    amount_paid: f64,
    payment_date: NaiveDate,
    payment_method: String,
    transaction_ref: Option<String>,
}

impl PgEntity for Payment {
    const TABLE: &'static str = "payments";
    const COLUMNS: &'static [&'static str] = &[
        "installment_id",
        "amount_paid",
        "payment_date",
        "payment_method",
        "transaction_ref",
    ];
    type Row = PaymentRow;

    fn from_row(row: PaymentRow) -> Result<Record<Self>, DomainError> {
        Ok(row.meta.into_record(Payment {
            installment_id: row.installment_id,
            amount_paid: row.amount_paid,
            payment_date: row.payment_date,
            payment_method: row.payment_method,
            transaction_ref: row.transaction_ref,
        }))
    }

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values
            .push_bind(self.installment_id)
            .push_bind(self.amount_paid)
            .push_bind(self.payment_date)
            .push_bind(self.payment_method.clone())
            .push_bind(self.transaction_ref.clone());
    }
}

// ---------------------------------------------------------------------------
// Location pricing
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct LocationPricingRow {
    #[sqlx(flatten)]
    meta: RecordMetaRow,
    zip_code: String,
    city: String,
    price_per_sqft: f64,
    effective_date: NaiveDate,
}

impl PgEntity for LocationPricing {
    const TABLE: &'static str = "location_pricing";
    const COLUMNS: &'static [&'static str] = &["zip_code", "city", "price_per_sqft", "effective_date"];
    type Row = LocationPricingRow;

    fn from_row(row: LocationPricingRow) -> Result<Record<Self>, DomainError> {
        Ok(row.meta.into_record(LocationPricing {
            zip_code: row.zip_code,
            city: row.city,
            price_per_sqft: row.price_per_sqft,
            effective_date: row.effective_date,
        }))
    }

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values
            .push_bind(self.zip_code.clone())
            .push_bind(self.city.clone())
            .push_bind(self.price_per_sqft)
            .push_bind(self.effective_date);
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct UserRow {
    #[sqlx(flatten)]
    meta: RecordMetaRow,
    username: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    role: String,
    email: String,
    phone: Option<String>,
}

impl PgEntity for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "username",
        "password_hash",
        "first_name",
        "last_name",
        "role",
        "email",
        "phone",
    ];
    type Row = UserRow;

    fn from_row(row: UserRow) -> Result<Record<Self>, DomainError> {
        Ok(row.meta.into_record(User {
            username: row.username,
            password_hash: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            role: row.role,
            email: row.email,
            phone: row.phone,
        }))
    }

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values
            .push_bind(self.username.clone())
            .push_bind(self.password_hash.clone())
            .push_bind(self.first_name.clone())
            .push_bind(self.last_name.clone())
            .push_bind(self.role.clone())
            .push_bind(self.email.clone())
            .push_bind(self.phone.clone());
    }
}

// ---------------------------------------------------------------------------
// Commission
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct CommissionRow {
    #[sqlx(flatten)]
    meta: RecordMetaRow,
    transaction_type: String,
    transaction_id: i64,
    beneficiary_id: i64,
    commission_type: String,
    rate_or_amount: f64,
    calculated_amount: f64,
    memo: Option<String>,
}

impl PgEntity for Commission {
    const TABLE: &'static str = "commissions";
    const COLUMNS: &'static [&'static str] = &[
        "transaction_type",
        "transaction_id",
        "beneficiary_id",
        "commission_type",
        "rate_or_amount",
        "calculated_amount",
        "memo",
    ];
    type Row = CommissionRow;

    fn from_row(row: CommissionRow) -> Result<Record<Self>, DomainError> {
        let transaction_type = TransactionType::from_str(&row.transaction_type)
            .ok_or_else(|| corrupt_column(Self::TABLE, "transaction_type", &row.transaction_type))?;
        let commission_type = CommissionType::from_str(&row.commission_type)
            .ok_or_else(|| corrupt_column(Self::TABLE, "commission_type", &row.commission_type))?;

        Ok(row.meta.into_record(Commission {
            transaction: TransactionRef::new(transaction_type, row.transaction_id),
            beneficiary_id: row.beneficiary_id,
            commission_type,
            rate_or_amount: row.rate_or_amount,
            calculated_amount: row.calculated_amount,
            memo: row.memo,
        }))
    }

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values
            .push_bind(self.transaction.transaction_type.as_str())
            .push_bind(self.transaction.transaction_id)
            .push_bind(self.beneficiary_id)
            .push_bind(self.commission_type.as_str())
            .push_bind(self.rate_or_amount)
            .push_bind(self.calculated_amount)
            .push_bind(self.memo.clone());
    }
}
