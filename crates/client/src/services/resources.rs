//! The CRUD resources of the backend.

use erpdesk_accounting::{Expense, ExpenseInput};
use erpdesk_auth::{RoleInput, RoleRecord};
use erpdesk_core::DomainResult;
use erpdesk_inventory::{DamagedStock, DamagedStockInput, StockTransfer, StockTransferInput, Warehouse, WarehouseInput};
use erpdesk_parties::{Contact, ContactInput, Customer, CustomerInput, Supplier, SupplierInput};
use erpdesk_products::{Category, CategoryInput, Product, ProductInput};
use erpdesk_sales::{Sale, SaleInput};

use crate::dto::access::{RolePayload, RoleWire};
use crate::dto::catalog::{CategoryPayload, CategoryWire, ProductPayload, ProductWire};
use crate::dto::expenses::{ExpensePayload, ExpenseWire};
use crate::dto::inventory::{
    DamagedStockPayload, DamagedStockWire, StockTransferPayload, StockTransferWire, WarehousePayload, WarehouseWire,
};
use crate::dto::parties::{ContactPayload, ContactWire, CustomerPayload, CustomerWire, SupplierPayload, SupplierWire};
use crate::dto::sales::{SalePayload, SaleWire};
use crate::resource::Resource;

#[derive(Debug, Clone, Copy)]
pub struct Customers;

impl Resource for Customers {
    const PATH: &'static str = "/customers";
    const NAME: &'static str = "customer";
    type Record = Customer;
    type Wire = CustomerWire;
    type Input = CustomerInput;
    type Payload = CustomerPayload;

    fn validate(input: &CustomerInput) -> DomainResult<()> {
        input.validate()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Suppliers;

impl Resource for Suppliers {
    const PATH: &'static str = "/suppliers";
    const NAME: &'static str = "supplier";
    type Record = Supplier;
    type Wire = SupplierWire;
    type Input = SupplierInput;
    type Payload = SupplierPayload;

    fn validate(input: &SupplierInput) -> DomainResult<()> {
        input.validate()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Contacts;

impl Resource for Contacts {
    const PATH: &'static str = "/contacts";
    const NAME: &'static str = "contact";
    type Record = Contact;
    type Wire = ContactWire;
    type Input = ContactInput;
    type Payload = ContactPayload;

    fn validate(input: &ContactInput) -> DomainResult<()> {
        input.validate()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Products;

impl Resource for Products {
    const PATH: &'static str = "/products";
    const NAME: &'static str = "product";
    type Record = Product;
    type Wire = ProductWire;
    type Input = ProductInput;
    type Payload = ProductPayload;

    fn validate(input: &ProductInput) -> DomainResult<()> {
        input.validate()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Categories;

impl Resource for Categories {
    const PATH: &'static str = "/categories";
    const NAME: &'static str = "category";
    type Record = Category;
    type Wire = CategoryWire;
    type Input = CategoryInput;
    type Payload = CategoryPayload;

    fn validate(input: &CategoryInput) -> DomainResult<()> {
        input.validate()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Warehouses;

impl Resource for Warehouses {
    const PATH: &'static str = "/warehouses";
    const NAME: &'static str = "warehouse";
    type Record = Warehouse;
    type Wire = WarehouseWire;
    type Input = WarehouseInput;
    type Payload = WarehousePayload;

    fn validate(input: &WarehouseInput) -> DomainResult<()> {
        input.validate()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StockTransfers;

impl Resource for StockTransfers {
    const PATH: &'static str = "/stock-transfers";
    const NAME: &'static str = "stock_transfer";
    type Record = StockTransfer;
    type Wire = StockTransferWire;
    type Input = StockTransferInput;
    type Payload = StockTransferPayload;

    fn validate(input: &StockTransferInput) -> DomainResult<()> {
        input.validate()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DamagedStocks;

impl Resource for DamagedStocks {
    const PATH: &'static str = "/damaged-stocks";
    const NAME: &'static str = "damaged_stock";
    type Record = DamagedStock;
    type Wire = DamagedStockWire;
    type Input = DamagedStockInput;
    type Payload = DamagedStockPayload;

    fn validate(input: &DamagedStockInput) -> DomainResult<()> {
        input.validate()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Expenses;

impl Resource for Expenses {
    const PATH: &'static str = "/expenses";
    const NAME: &'static str = "expense";
    type Record = Expense;
    type Wire = ExpenseWire;
    type Input = ExpenseInput;
    type Payload = ExpensePayload;

    fn validate(input: &ExpenseInput) -> DomainResult<()> {
        input.validate()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sales;

impl Resource for Sales {
    const PATH: &'static str = "/sales";
    const NAME: &'static str = "sale";
    type Record = Sale;
    type Wire = SaleWire;
    type Input = SaleInput;
    type Payload = SalePayload;

    fn validate(input: &SaleInput) -> DomainResult<()> {
        input.validate()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Roles;

impl Resource for Roles {
    const PATH: &'static str = "/roles";
    const NAME: &'static str = "role";
    type Record = RoleRecord;
    type Wire = RoleWire;
    type Input = RoleInput;
    type Payload = RolePayload;

    fn validate(input: &RoleInput) -> DomainResult<()> {
        input.validate()
    }
}
