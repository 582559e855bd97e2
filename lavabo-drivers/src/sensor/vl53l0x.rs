//! VL53L0X time-of-flight distance sensor
//!
//! Single-shot ranging over I2C. Initialisation is the reduced sequence
//! needed for short-range presence detection: 2V8 I/O mode, stop
//! variable capture, limit-check setup, interrupt routing and the two
//! reference calibrations. SPAD and tuning tables are left at their
//! power-on defaults.

use embedded_hal::delay::DelayNs;
use lavabo_core::traits::{RangeSensor, SensorError};
use lavabo_hal::I2cBus;

/// Factory I2C address
pub const DEFAULT_ADDRESS: u8 = 0x29;

/// Expected value of the model ID register
const MODEL_ID: u8 = 0xEE;

/// Register map (subset)
#[allow(dead_code)]
mod reg {
    pub const SYSRANGE_START: u8 = 0x00;
    pub const SYSTEM_SEQUENCE_CONFIG: u8 = 0x01;
    pub const SYSTEM_INTERRUPT_CONFIG_GPIO: u8 = 0x0A;
    pub const SYSTEM_INTERRUPT_CLEAR: u8 = 0x0B;
    pub const RESULT_INTERRUPT_STATUS: u8 = 0x13;
    pub const RESULT_RANGE_STATUS: u8 = 0x14;
    pub const MSRC_CONFIG_CONTROL: u8 = 0x60;
    pub const GPIO_HV_MUX_ACTIVE_HIGH: u8 = 0x84;
    pub const I2C_MODE: u8 = 0x88;
    pub const VHV_CONFIG_PAD_SCL_SDA_EXTSUP_HV: u8 = 0x89;
    pub const STOP_VARIABLE: u8 = 0x91;
    pub const IDENTIFICATION_MODEL_ID: u8 = 0xC0;
    pub const POWER_MANAGEMENT: u8 = 0x80;
    pub const PAGE_SELECT: u8 = 0xFF;
}

/// Interrupt status bits signalling a finished measurement
const INTERRUPT_READY_MASK: u8 = 0x07;

/// Range value offset from RESULT_RANGE_STATUS
const RANGE_OFFSET: u8 = 10;

/// Poll step while waiting for the sensor (ms)
const POLL_STEP_MS: u32 = 1;

/// VL53L0X driver
pub struct Vl53l0x<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    /// Per-operation timeout; 0 waits forever
    timeout_ms: u16,
    /// Value captured at init and restored before each measurement
    stop_variable: u8,
}

impl<I2C, D> Vl53l0x<I2C, D>
where
    I2C: I2cBus,
    D: DelayNs,
{
    /// Create a driver at the factory address
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_ADDRESS)
    }

    /// Create a driver at a custom address
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            timeout_ms: 0,
            stop_variable: 0,
        }
    }

    /// Check that a VL53L0X answers at the configured address
    pub fn is_present(&mut self) -> bool {
        matches!(self.read_reg(reg::IDENTIFICATION_MODEL_ID), Ok(MODEL_ID))
    }

    /// Probe and initialise the sensor
    ///
    /// Returns `SensorError::NotPresent` when nothing with the right
    /// model ID answers.
    pub fn init(&mut self) -> Result<(), SensorError> {
        if !self.is_present() {
            return Err(SensorError::NotPresent);
        }

        // 2V8 I/O mode
        let extsup = self.read_reg(reg::VHV_CONFIG_PAD_SCL_SDA_EXTSUP_HV)?;
        self.write_reg(reg::VHV_CONFIG_PAD_SCL_SDA_EXTSUP_HV, extsup | 0x01)?;

        // Standard I2C mode
        self.write_reg(reg::I2C_MODE, 0x00)?;

        self.write_reg(reg::POWER_MANAGEMENT, 0x01)?;
        self.write_reg(reg::PAGE_SELECT, 0x01)?;
        self.write_reg(reg::SYSRANGE_START, 0x00)?;
        self.stop_variable = self.read_reg(reg::STOP_VARIABLE)?;
        self.write_reg(reg::SYSRANGE_START, 0x01)?;
        self.write_reg(reg::PAGE_SELECT, 0x00)?;
        self.write_reg(reg::POWER_MANAGEMENT, 0x00)?;

        // Disable SIGNAL_RATE_MSRC and SIGNAL_RATE_PRE_RANGE limit checks
        let msrc = self.read_reg(reg::MSRC_CONFIG_CONTROL)?;
        self.write_reg(reg::MSRC_CONFIG_CONTROL, msrc | 0x12)?;

        // Interrupt on new sample ready, active low
        self.write_reg(reg::SYSTEM_INTERRUPT_CONFIG_GPIO, 0x04)?;
        let mux = self.read_reg(reg::GPIO_HV_MUX_ACTIVE_HIGH)?;
        self.write_reg(reg::GPIO_HV_MUX_ACTIVE_HIGH, mux & !0x10)?;
        self.write_reg(reg::SYSTEM_INTERRUPT_CLEAR, 0x01)?;

        // VHV then phase reference calibration
        self.write_reg(reg::SYSTEM_SEQUENCE_CONFIG, 0x01)?;
        self.single_ref_calibration(0x40)?;
        self.write_reg(reg::SYSTEM_SEQUENCE_CONFIG, 0x02)?;
        self.single_ref_calibration(0x00)?;

        // Restore the default measurement sequence
        self.write_reg(reg::SYSTEM_SEQUENCE_CONFIG, 0xE8)?;

        Ok(())
    }

    /// Set the per-operation timeout in milliseconds (0 disables)
    pub fn set_timeout(&mut self, timeout_ms: u16) {
        self.timeout_ms = timeout_ms;
    }

    /// Perform one single-shot measurement
    pub fn read_range_single_mm(&mut self) -> Result<u16, SensorError> {
        self.write_reg(reg::POWER_MANAGEMENT, 0x01)?;
        self.write_reg(reg::PAGE_SELECT, 0x01)?;
        self.write_reg(reg::SYSRANGE_START, 0x00)?;
        self.write_reg(reg::STOP_VARIABLE, self.stop_variable)?;
        self.write_reg(reg::SYSRANGE_START, 0x01)?;
        self.write_reg(reg::PAGE_SELECT, 0x00)?;
        self.write_reg(reg::POWER_MANAGEMENT, 0x00)?;

        self.write_reg(reg::SYSRANGE_START, 0x01)?;

        // Start bit clears once the measurement has begun
        self.wait_until(|s| Ok(s.read_reg(reg::SYSRANGE_START)? & 0x01 == 0))?;
        self.wait_until(|s| {
            Ok(s.read_reg(reg::RESULT_INTERRUPT_STATUS)? & INTERRUPT_READY_MASK != 0)
        })?;

        let range = self.read_reg16(reg::RESULT_RANGE_STATUS + RANGE_OFFSET)?;
        self.write_reg(reg::SYSTEM_INTERRUPT_CLEAR, 0x01)?;

        Ok(range)
    }

    fn single_ref_calibration(&mut self, vhv_init_byte: u8) -> Result<(), SensorError> {
        self.write_reg(reg::SYSRANGE_START, 0x01 | vhv_init_byte)?;
        self.wait_until(|s| {
            Ok(s.read_reg(reg::RESULT_INTERRUPT_STATUS)? & INTERRUPT_READY_MASK != 0)
        })?;
        self.write_reg(reg::SYSTEM_INTERRUPT_CLEAR, 0x01)?;
        self.write_reg(reg::SYSRANGE_START, 0x00)?;
        Ok(())
    }

    /// Poll `done` every millisecond until it holds or the timeout expires
    fn wait_until<F>(&mut self, mut done: F) -> Result<(), SensorError>
    where
        F: FnMut(&mut Self) -> Result<bool, SensorError>,
    {
        let mut waited_ms: u32 = 0;
        loop {
            if done(self)? {
                return Ok(());
            }
            if self.timeout_ms > 0 && waited_ms >= self.timeout_ms as u32 {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_ms(POLL_STEP_MS);
            waited_ms += POLL_STEP_MS;
        }
    }

    fn write_reg(&mut self, register: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(|_| SensorError::Bus)
    }

    fn read_reg(&mut self, register: u8) -> Result<u8, SensorError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(buf[0])
    }

    fn read_reg16(&mut self, register: u8) -> Result<u16, SensorError> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(u16::from_be_bytes(buf))
    }
}

impl<I2C, D> RangeSensor for Vl53l0x<I2C, D>
where
    I2C: I2cBus,
    D: DelayNs,
{
    fn read_range_mm(&mut self) -> Result<u16, SensorError> {
        self.read_range_single_mm()
    }
}
