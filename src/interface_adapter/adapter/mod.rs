pub mod clock_adapter_factory;
