mod closest_point2;
mod tree_balance2;
