mod inventory;
mod servicing;
