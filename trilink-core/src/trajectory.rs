/// Default number of animation instants.
pub const DEFAULT_FRAMES: usize = 100;

/// Joint angles for one instant, in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JointAngles {
    pub phi1: f32,
    pub phi2: f32,
    pub phi3: f32,
}

impl JointAngles {
    pub fn new(phi1: f32, phi2: f32, phi3: f32) -> Self {
        Self { phi1, phi2, phi3 }
    }

    #[inline]
    pub fn as_array(&self) -> [f32; 3] {
        [self.phi1, self.phi2, self.phi3]
    }
}

impl From<[f32; 3]> for JointAngles {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "phi1={:6.2}° phi2={:6.2}° phi3={:6.2}°",
            self.phi1, self.phi2, self.phi3
        )
    }
}

/// Synchronized sweep of all joints.
///
/// Every joint moves from `start` towards `end` in `frames` equal steps. The
/// end angle itself is excluded.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep {
    start: f32,
    step: f32,
    frames: usize,
    index: usize,
}

impl Sweep {
    pub fn new(frames: usize, start: f32, end: f32) -> Self {
        let step = if frames == 0 {
            0.0
        } else {
            (end - start) / frames as f32
        };

        Self {
            start,
            step,
            frames,
            index: 0,
        }
    }

    /// Angle increment between two instants.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self::new(DEFAULT_FRAMES, 0.0, 360.0)
    }
}

impl Iterator for Sweep {
    type Item = JointAngles;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.frames {
            return None;
        }

        let angle = (self.start as f64 + self.index as f64 * self.step as f64) as f32;
        self.index += 1;

        Some(JointAngles::new(angle, angle, angle))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.index = self.index.saturating_add(n).min(self.frames);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frames - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sweep {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sweep() {
        let angles: Vec<_> = Sweep::default().collect();

        assert_eq!(angles.len(), 100);
        assert_eq!(angles[0], JointAngles::new(0.0, 0.0, 0.0));

        for pair in angles.windows(2) {
            let delta = pair[1].phi1 - pair[0].phi1;

            assert!(pair[1].phi1 > pair[0].phi1);
            assert!((delta - 3.6).abs() < 1e-3);
            assert_eq!(pair[1].phi1, pair[1].phi2);
            assert_eq!(pair[1].phi2, pair[1].phi3);
        }

        assert!(angles.last().unwrap().phi1 < 360.0);
    }

    #[test]
    fn test_sweep_size() {
        let mut sweep = Sweep::new(4, 10.0, 20.0);

        assert_eq!(sweep.len(), 4);
        assert_eq!(sweep.step(), 2.5);
        sweep.next();
        assert_eq!(sweep.len(), 3);
        assert_eq!(sweep.last(), Some(JointAngles::new(17.5, 17.5, 17.5)));
    }

    #[test]
    fn test_sweep_large_index() {
        let base = (1_usize << 24) - 4;
        let values: Vec<f32> = Sweep::new(1 << 25, 0.0, 3.0 * (1 << 25) as f32)
            .skip(base)
            .take(8)
            .map(|angles| angles.phi1)
            .collect();

        for (offset, value) in values.iter().enumerate() {
            let expected = (base + offset) as f64 * 3.0;
            assert!((*value as f64 - expected).abs() <= 2.0);
        }

        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_empty_sweep() {
        assert_eq!(Sweep::new(0, 0.0, 360.0).count(), 0);
    }

    #[test]
    fn test_joint_angles_array() {
        let angles = JointAngles::from([1.0, 2.0, 3.0]);

        assert_eq!(angles.as_array(), [1.0, 2.0, 3.0]);
        assert_eq!(
            angles.to_string(),
            "phi1=  1.00° phi2=  2.00° phi3=  3.00°"
        );
    }
}
