#![allow(non_snake_case)]

fn TestPush() {}

fn TestPop() {}
