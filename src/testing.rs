pub mod family_contract;
