use std::sync::Arc;

use chrono::Utc;

use crate::loans::models::{ApplyLoanRequest, LoanApplication, LoanStatus, LoanType};
use crate::store::MemoryStore;

/// Loan application storage
#[derive(Clone)]
pub struct LoanRepository {
    store: Arc<MemoryStore>,
}

impl LoanRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Record a new application in the pending state
    pub async fn create(&self, user_id: i32, request: ApplyLoanRequest) -> LoanApplication {
        let mut loans = self.store.loans.write().await;
        loans.insert_with(|id| LoanApplication {
            id,
            user_id,
            loan_type: request.loan_type,
            amount: request.amount,
            purpose: request.purpose,
            repayment_period: request.repayment_period,
            collateral: request.collateral,
            crop_details: request.crop_details,
            equipment_details: request.equipment_details,
            status: LoanStatus::Pending,
            applied_at: Utc::now(),
        })
    }

    /// Applications owned by a user, optionally filtered
    pub async fn list_for_user(
        &self,
        user_id: i32,
        status: Option<LoanStatus>,
        loan_type: Option<LoanType>,
    ) -> Vec<LoanApplication> {
        self.store.loans.read().await.filter(|loan| {
            loan.user_id == user_id
                && status.map_or(true, |s| loan.status == s)
                && loan_type.map_or(true, |t| loan.loan_type == t)
        })
    }

    /// An application, only if it belongs to `user_id`
    pub async fn find_owned(&self, user_id: i32, id: i32) -> Option<LoanApplication> {
        self.find_by_id(id).await.filter(|loan| loan.user_id == user_id)
    }

    pub async fn find_by_id(&self, id: i32) -> Option<LoanApplication> {
        self.store.loans.read().await.get(id).cloned()
    }

    pub async fn list_all(&self) -> Vec<LoanApplication> {
        self.store.loans.read().await.all()
    }
}
