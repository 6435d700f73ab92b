mod available_part;
mod catalog;
mod parts_allocation;
mod spare_part_order;
mod supplier;
