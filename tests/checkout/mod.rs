mod checkout_switches_branch;
mod checkout_unknown_branch_fails;
