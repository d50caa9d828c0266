use crate::{
    apis::{
        connect::AccountsResponse,
        customers::{
            BusinessCustomerResponse, CreateBusinessCustomerRequest,
            CreateIndividualCustomerRequest, CustomerResponse, CustomerTransactionsResponse,
            DeleteCustomerResponse, IndividualCustomerResponse, ListCustomersRequest,
            ListCustomersResponse, ListLinkedAccountsRequest, UpdateCustomerRequest,
            UpdateCustomerResponse,
        },
        DataEnvelope, MonoClientInner,
    },
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Mono customer management APIs client.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    inner: Arc<MonoClientInner>,
}

impl CustomersApi {
    pub(crate) fn new(inner: Arc<MonoClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new individual customer.
    #[tracing::instrument(name = "Create Individual Customer", skip(self, request))]
    pub async fn create_individual(
        &self,
        request: &CreateIndividualCustomerRequest,
    ) -> Result<IndividualCustomerResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v2/customers").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Creates a new business customer.
    #[tracing::instrument(name = "Create Business Customer", skip(self, request))]
    pub async fn create_business(
        &self,
        request: &CreateBusinessCustomerRequest,
    ) -> Result<BusinessCustomerResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v2/customers").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the details of an existing customer.
    #[tracing::instrument(name = "Get Customer", skip(self))]
    pub async fn get(&self, customer_id: &str) -> Result<CustomerResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/v2/customers/{}", encode(customer_id)))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists all customers, optionally filtered by page, phone or email.
    #[tracing::instrument(name = "List Customers", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListCustomersRequest,
    ) -> Result<ListCustomersResponse, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.base_url.join("/v2/customers").unwrap())
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the transactions of a single customer across all their linked
    /// accounts, for the given period.
    ///
    /// `period` must be non-empty (e.g. `"last3months"`), otherwise the call
    /// fails locally with [`Error::ValidationError`] before any request is sent.
    #[tracing::instrument(name = "Get Customer Transactions", skip(self))]
    pub async fn transactions(
        &self,
        customer_id: &str,
        period: &str,
        page: u32,
    ) -> Result<CustomerTransactionsResponse, Error> {
        if period.is_empty() {
            return Err(Error::ValidationError(
                "period is required to fetch customer transactions".to_string(),
            ));
        }

        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v2/customers/{}/transactions",
                        encode(customer_id)
                    ))
                    .unwrap(),
            )
            .query(&[("period", period.to_string()), ("page", page.to_string())])
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the bank accounts linked by customers, optionally filtered by
    /// page, account number, account name or institution.
    #[tracing::instrument(name = "List Linked Accounts", skip(self, request))]
    pub async fn linked_accounts(
        &self,
        request: &ListLinkedAccountsRequest,
    ) -> Result<AccountsResponse, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.base_url.join("/v2/accounts").unwrap())
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Updates the details of an existing customer.
    #[tracing::instrument(name = "Update Customer", skip(self, request))]
    pub async fn update(
        &self,
        customer_id: &str,
        request: &UpdateCustomerRequest,
    ) -> Result<UpdateCustomerResponse, Error> {
        let res = self
            .inner
            .client
            .patch(
                self.inner
                    .base_url
                    .join(&format!("/v2/customers/{}", encode(customer_id)))
                    .unwrap(),
            )
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Deletes an existing customer.
    #[tracing::instrument(name = "Delete Customer", skip(self))]
    pub async fn delete(&self, customer_id: &str) -> Result<DeleteCustomerResponse, Error> {
        let res = self
            .inner
            .client
            .delete(
                self.inner
                    .base_url
                    .join(&format!("/v2/customers/{}", encode(customer_id)))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
