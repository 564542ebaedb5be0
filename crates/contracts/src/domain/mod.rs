pub mod common;
pub mod registry;

pub mod a001_country;
pub mod a002_province;
pub mod a003_city;
pub mod a004_warehouse;
pub mod a005_bank;
pub mod a006_currency;
pub mod a007_cost_setting;
pub mod a008_product_category;
pub mod a009_uom;
pub mod a010_channel;
pub mod a011_variant;
pub mod a012_forwarder;
pub mod a013_store;
pub mod a014_purchase_order;
pub mod a015_proforma_invoice;
pub mod a016_cx_quotation;
pub mod a017_cx_invoice;
pub mod a018_goods_receipt;
pub mod a019_last_mile;
pub mod a020_pi_payment;
pub mod a021_buying_price;
pub mod a022_selling_price;
