



#[cfg(test)]
mod rejection_tests;

#[cfg(test)]
mod policy_tests;


#[cfg(test)]
mod stats_tests;
