pub mod a017_cx_invoice;
pub mod a021_buying_price;
pub mod a022_selling_price;
pub mod resource;
