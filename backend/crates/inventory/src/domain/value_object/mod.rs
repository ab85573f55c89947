pub mod category_name;
