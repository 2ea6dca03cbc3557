//! Service wrappers against a mocked backend.

use mockito::{Matcher, Server};
use serde_json::json;

use erpdesk_auth::Permission;
use erpdesk_client::{ApiClient, ApiError, CompanySettings, ListQuery, Services};
use erpdesk_core::RecordId;
use erpdesk_inventory::TransferStatus;
use erpdesk_parties::CustomerInput;

fn services(server: &Server) -> Services {
    Services::new(ApiClient::with_base_url(format!("{}/api", server.url())).unwrap())
}

#[tokio::test]
async fn customers_list_renames_fields_and_passes_query_through() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/customers")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("search".into(), "acme".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": [{"id": 7, "name": "Acme", "tax_number": "VAT-77", "opening_balance": "12.50"}],
                "meta": {"current_page": 2, "last_page": 2, "per_page": 15, "total": 16}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let query = ListQuery::new().page(2).search("acme");
    let page = services(&server).customers().get_page(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.meta.total, Some(16));
    let customer = &page.items[0];
    assert_eq!(customer.tax_number.as_deref(), Some("VAT-77"));
    assert_eq!(customer.opening_balance, 12.5);

    let json = serde_json::to_value(customer).unwrap();
    assert_eq!(json["taxNumber"], "VAT-77");
}

#[tokio::test]
async fn enveloped_and_bare_records_decode_the_same() {
    let mut server = Server::new_async().await;
    let body = json!({"id": 3, "name": "Beans", "sku": "B-1", "cost_price": "1.00", "selling_price": "2.50"});
    let _wrapped = server
        .mock("GET", "/api/products/3")
        .with_status(200)
        .with_body(json!({"data": body, "message": "ok"}).to_string())
        .create_async()
        .await;
    let _bare = server
        .mock("GET", "/api/products/4")
        .with_status(200)
        .with_body(json!({"id": 3, "name": "Beans", "sku": "B-1", "cost_price": 1, "selling_price": 2.5}).to_string())
        .create_async()
        .await;

    let products = services(&server).products();
    let a = products.get_by_id(&RecordId::from(3u64)).await.unwrap();
    let b = products.get_by_id(&RecordId::from(4u64)).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn create_sends_snake_case_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/customers")
        .match_body(Matcher::PartialJson(json!({"name": "Acme", "tax_number": "T-1"})))
        .with_status(201)
        .with_body(json!({"data": {"id": 11, "name": "Acme", "tax_number": "T-1"}}).to_string())
        .create_async()
        .await;

    let input = CustomerInput {
        name: "Acme".into(),
        tax_number: Some("T-1".into()),
        ..CustomerInput::default()
    };
    let created = services(&server).customers().create(&input).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, RecordId::from(11u64));
}

#[tokio::test]
async fn invalid_input_never_reaches_the_backend() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", "/api/customers").expect(0).create_async().await;

    let err = services(&server)
        .customers()
        .create(&CustomerInput::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, ApiError::Domain(_)));
}

#[tokio::test]
async fn login_sets_the_token_for_every_service() {
    let mut server = Server::new_async().await;
    let _login = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(json!({"email": "sam@shop.test", "password": "secret"})))
        .with_status(200)
        .with_body(
            json!({
                "token": "tok-1",
                "user": {"id": 1, "name": "Sam", "email": "sam@shop.test", "role": "cashier"},
                "permissions": ["sales.view", "customers.view"]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let warehouses = server
        .mock("GET", "/api/warehouses")
        .match_header("authorization", "Bearer tok-1")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let services = services(&server);
    let session = services.auth().login(" sam@shop.test ", "secret").await.unwrap();
    assert!(session.permissions.contains(&Permission::new("sales.view")));

    let list = services.warehouses().get_all(&ListQuery::new()).await.unwrap();
    assert!(list.is_empty());
    warehouses.assert_async().await;
}

#[tokio::test]
async fn logout_forgets_the_token_even_when_the_backend_fails() {
    let mut server = Server::new_async().await;
    let _logout = server
        .mock("POST", "/api/auth/logout")
        .with_status(500)
        .with_body(r#"{"message":"session store down"}"#)
        .create_async()
        .await;

    let services = services(&server);
    services.client().set_token(Some("tok-1".into()));
    let err = services.auth().logout().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(services.client().token(), None);
}

#[tokio::test]
async fn error_statuses_are_mapped() {
    let mut server = Server::new_async().await;
    let _missing = server
        .mock("GET", "/api/suppliers/9")
        .with_status(404)
        .with_body(r#"{"message":"Supplier not found"}"#)
        .create_async()
        .await;
    let _expired = server
        .mock("GET", "/api/auth/me")
        .with_status(401)
        .create_async()
        .await;

    let services = services(&server);
    let err = services.suppliers().get_by_id(&RecordId::from(9u64)).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Supplier not found"));

    let err = services.auth().me().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn delete_accepts_an_empty_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/expenses/5")
        .with_status(204)
        .create_async()
        .await;

    services(&server).expenses().delete(&RecordId::from(5u64)).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn stock_transfer_status_is_put_to_its_own_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/stock-transfers/2/status")
        .match_body(Matcher::Json(json!({"status": "in_transit"})))
        .with_status(200)
        .with_body(
            json!({"data": {"id": 2, "from_warehouse_id": 1, "to_warehouse_id": 3, "status": "in_transit"}}).to_string(),
        )
        .create_async()
        .await;

    let transfer = services(&server)
        .stock_transfers()
        .update_status(&RecordId::from(2u64), TransferStatus::InTransit)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(transfer.status, TransferStatus::InTransit);
    assert_eq!(transfer.reference_no, "TRF-2");
}

#[tokio::test]
async fn settings_and_reports_unwrap_their_envelopes() {
    let mut server = Server::new_async().await;
    let _settings = server
        .mock("GET", "/api/settings")
        .with_status(200)
        .with_body(json!({"data": {"company_name": "Corner Shop", "currency_symbol": "€"}}).to_string())
        .create_async()
        .await;
    let _profit = server
        .mock("GET", "/api/reports/profit")
        .match_query(Matcher::UrlEncoded("from".into(), "2024-01-01".into()))
        .with_status(200)
        .with_body(json!({"data": {"revenue": "900", "net_profit": "120.5"}}).to_string())
        .create_async()
        .await;

    let services = services(&server);
    let settings = services.settings().get().await.unwrap();
    assert_eq!(settings.company_name, "Corner Shop");
    assert_eq!(settings.currency_symbol, "€");

    let profit = services
        .reports()
        .profit_summary(&ListQuery::new().param("from", "2024-01-01"))
        .await
        .unwrap();
    assert_eq!(profit.net_profit, 120.5);
}

#[tokio::test]
async fn settings_update_with_only_a_message_is_a_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("PUT", "/api/settings")
        .with_status(200)
        .with_body(json!({"success": true, "message": "Settings updated"}).to_string())
        .create_async()
        .await;

    let settings = CompanySettings {
        company_name: "Corner Shop".into(),
        ..CompanySettings::default()
    };
    let err = services(&server).settings().update(&settings).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn settings_with_a_bad_data_payload_is_a_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/settings")
        .with_status(200)
        .with_body(json!({"data": {"company_name": "Corner Shop", "tax_rate": "n/a"}}).to_string())
        .create_async()
        .await;

    let err = services(&server).settings().get().await.unwrap_err();
    match err {
        ApiError::Decode(msg) => assert!(msg.contains("n/a"), "{msg}"),
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn report_without_any_figures_is_a_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/reports/sales")
        .with_status(200)
        .with_body(json!({"success": false, "message": "No data"}).to_string())
        .create_async()
        .await;

    let err = services(&server).reports().sales_summary(&ListQuery::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn rows_carrying_old_and_new_column_names_still_list() {
    let mut server = Server::new_async().await;
    let _sales = server
        .mock("GET", "/api/sales")
        .with_status(200)
        .with_body(
            json!({"data": [{
                "id": 1,
                "invoice_no": "INV-1",
                "subtotal": "10",
                "total": "10",
                "grand_total": "10",
                "paid_amount": "10"
            }]})
            .to_string(),
        )
        .create_async()
        .await;
    let _products = server
        .mock("GET", "/api/products")
        .with_status(200)
        .with_body(json!([{"id": 3, "name": "Beans", "sku": "B-1", "price": "2.00", "selling_price": "2.50"}]).to_string())
        .create_async()
        .await;

    let services = services(&server);
    let sales = services.sales().get_all(&ListQuery::new()).await.unwrap();
    assert_eq!(sales[0].grand_total, 10.0);
    assert_eq!(sales[0].due_amount(), 0.0);

    let products = services.products().get_all(&ListQuery::new()).await.unwrap();
    assert_eq!(products[0].selling_price, 2.5);
}

#[tokio::test]
async fn a_bad_row_names_itself_in_the_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/customers")
        .with_status(200)
        .with_body(json!({"data": [{"id": 1, "name": "Ok"}, {"id": 2}]}).to_string())
        .create_async()
        .await;

    let err = services(&server).customers().get_all(&ListQuery::new()).await.unwrap_err();
    match err {
        ApiError::Decode(msg) => {
            assert!(msg.contains("item 1"), "{msg}");
            assert!(msg.contains("name"), "{msg}");
        }
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn raw_records_keep_every_field_in_camel_case() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/customers/7")
        .with_status(200)
        .with_body(json!({"data": {"id": 7, "name": "Acme", "loyalty_tier": {"tier_name": "gold"}}}).to_string())
        .create_async()
        .await;

    let raw = services(&server)
        .customers()
        .get_raw(&RecordId::from(7u64))
        .await
        .unwrap();
    assert_eq!(raw["loyaltyTier"]["tierName"], "gold");
}
